//! C FFI layer for hosts that drive the simulation through an opaque handle.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//! They are thin wrappers over [`Simulation`](crate::Simulation) that handle
//! null checks, pointer safety, and C-to-Rust conversions.

pub mod lifecycle;
pub mod simulation;

pub use lifecycle::{tl_create, tl_create_default, tl_destroy, tl_generation};
pub use simulation::{
    tl_live_cells, tl_render, tl_render_len, tl_tick, TL_CONTINUE, TL_STOP,
};
