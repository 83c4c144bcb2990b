//! Core automaton logic: the toroidal grid, its digest and generation stepping.
//!
//! The simulation layer and the FFI layer in `ffi/` call into these.

pub mod digest;
pub mod grid;
pub mod stepping;

pub use digest::{digest_cells, fnv1a, Fnv1a};
pub use grid::{Grid, ALIVE_GLYPH, DEAD_GLYPH};
pub use stepping::{next_state, step_parallel, step_sequential, PARALLEL_THRESHOLD};
