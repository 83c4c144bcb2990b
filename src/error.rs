//! Construction-time errors.
//!
//! Nothing after construction is fallible: stepping, hashing and rendering are
//! total over any valid grid.

use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid) or
/// [`Simulation`](crate::Simulation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Width or height was zero or negative.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// A modulus or the digest history retention was zero or negative.
    #[error("invalid configuration: {field} must be positive, got {value}")]
    InvalidConfig { field: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, LifeError>;
