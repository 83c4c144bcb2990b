//! Toroidal Life - Game of Life engine with cycle detection
//!
//! A fixed-size wraparound grid evolves under B3/S23. Each tick hashes the new
//! generation and reports [`Signal::Stop`] once a state repeats within the
//! retained digest history, or when the generation count reaches a common
//! multiple of two configured moduli.
//!
//! The native API lives in [`Simulation`]; the `ffi` module exposes the same
//! operations through a C ABI opaque handle.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod history;
pub mod simulation;


pub use automaton::Grid;
pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use history::DigestHistory;
pub use simulation::{Signal, Simulation, StopReason};
