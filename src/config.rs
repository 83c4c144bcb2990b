//! Simulation parameters and their validation.

use crate::error::{LifeError, Result};

pub const DEFAULT_WIDTH: i64 = 100;
pub const DEFAULT_HEIGHT: i64 = 32;
pub const DEFAULT_MOD_1: i64 = 5;
pub const DEFAULT_MOD_2: i64 = 11;
pub const DEFAULT_DIGEST_HISTORY_RETENTION: i64 = 150;

/// Construction parameters for a [`Simulation`](crate::Simulation).
///
/// Fields are signed so that a host passing a negative value gets a
/// [`LifeError`] instead of a silent wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub width: i64,
    pub height: i64,
    /// First checkpoint modulus.
    pub mod_1: i64,
    /// Second checkpoint modulus.
    pub mod_2: i64,
    /// How many past digests are kept for cycle detection.
    pub digest_history_retention: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mod_1: DEFAULT_MOD_1,
            mod_2: DEFAULT_MOD_2,
            digest_history_retention: DEFAULT_DIGEST_HISTORY_RETENTION,
        }
    }
}

impl SimulationConfig {
    /// Config with the given dimensions and default moduli/retention.
    pub fn with_dimensions(width: i64, height: i64) -> Self {
        SimulationConfig {
            width,
            height,
            ..Default::default()
        }
    }

    /// Check every parameter. Dimensions are checked first.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        self.validate_stop_parameters()
    }

    /// Check the moduli and retention only.
    pub(crate) fn validate_stop_parameters(&self) -> Result<()> {
        positive("mod_1", self.mod_1)?;
        positive("mod_2", self.mod_2)?;
        positive("digest_history_retention", self.digest_history_retention)?;
        Ok(())
    }
}

pub(crate) fn validate_dimensions(width: i64, height: i64) -> Result<()> {
    cell_count(width, height).map(|_| ())
}

/// Number of cells in a `width` x `height` grid.
///
/// Fails when either side is non-positive, does not fit in `usize`, or the
/// product exceeds what a `Vec` can hold.
pub(crate) fn cell_count(width: i64, height: i64) -> Result<usize> {
    let invalid = LifeError::InvalidDimension { width, height };
    if width <= 0 || height <= 0 {
        return Err(invalid);
    }
    let w = usize::try_from(width).map_err(|_| invalid.clone())?;
    let h = usize::try_from(height).map_err(|_| invalid.clone())?;
    match w.checked_mul(h) {
        Some(n) if n <= isize::MAX as usize => Ok(n),
        _ => Err(invalid),
    }
}

fn positive(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(LifeError::InvalidConfig { field, value });
    }
    Ok(())
}
