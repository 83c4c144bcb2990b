//! Simulation driver: owns a grid, ticks it, and decides when to stop.
//!
//! A tick reports [`Signal::Stop`] when the new generation's digest was already
//! seen within the retained history (cycle or fixed point), or when the
//! generation count is a common multiple of both moduli (checkpoint).
//!
//! The engine never refuses to tick. `Stop` tells the caller to cease
//! scheduling; a caller that keeps ticking gets further generations with the
//! same predicate re-evaluated each time.

use std::fmt;

use log::{debug, info, trace};

use crate::automaton::Grid;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::history::DigestHistory;

/// Outcome of a single [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Continue,
    Stop,
}

impl Signal {
    pub fn is_stop(self) -> bool {
        self == Signal::Stop
    }

    /// The token string hosts compare against (`"continue"` / `"stop"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Continue => "continue",
            Signal::Stop => "stop",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which condition produced the last [`Signal::Stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The new state's digest was already in the history.
    CycleDetected,
    /// The generation count is divisible by both moduli.
    Checkpoint,
}

#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    config: SimulationConfig,
    mod_1: u64,
    mod_2: u64,
    history: DigestHistory,
    generation: u64,
    last_signal: Option<Signal>,
    last_stop_reason: Option<StopReason>,
}

impl Simulation {
    /// Build a seeded simulation from explicit parameters.
    pub fn new(
        width: i64,
        height: i64,
        mod_1: i64,
        mod_2: i64,
        digest_history_retention: i64,
    ) -> Result<Self> {
        Self::from_config(SimulationConfig {
            width,
            height,
            mod_1,
            mod_2,
            digest_history_retention,
        })
    }

    /// Build with default moduli and retention.
    pub fn with_dimensions(width: i64, height: i64) -> Result<Self> {
        Self::from_config(SimulationConfig::with_dimensions(width, height))
    }

    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self::assemble(grid, config))
    }

    /// Use a caller-built grid as generation 0.
    pub fn with_grid(
        grid: Grid,
        mod_1: i64,
        mod_2: i64,
        digest_history_retention: i64,
    ) -> Result<Self> {
        let config = SimulationConfig {
            width: grid.width() as i64,
            height: grid.height() as i64,
            mod_1,
            mod_2,
            digest_history_retention,
        };
        config.validate_stop_parameters()?;
        Ok(Self::assemble(grid, config))
    }

    // `config` must already be validated.
    fn assemble(grid: Grid, config: SimulationConfig) -> Self {
        debug!(
            "simulation created: {}x{}, mod_1={}, mod_2={}, retention={}, live={}",
            config.width,
            config.height,
            config.mod_1,
            config.mod_2,
            config.digest_history_retention,
            grid.live_count()
        );
        Simulation {
            grid,
            mod_1: config.mod_1 as u64,
            mod_2: config.mod_2 as u64,
            history: DigestHistory::new(config.digest_history_retention as usize),
            config,
            generation: 0,
            last_signal: None,
            last_stop_reason: None,
        }
    }

    /// Advance one generation and evaluate the stop predicate.
    pub fn tick(&mut self) -> Signal {
        self.grid.step();
        self.generation += 1;
        let digest = self.grid.digest();

        // Checked before `digest` is recorded.
        let reason = if self.history.contains(digest) {
            Some(StopReason::CycleDetected)
        } else if self.at_checkpoint() {
            Some(StopReason::Checkpoint)
        } else {
            None
        };

        self.history.push(digest);

        trace!(
            "generation {}: digest={:016x}, live={}, history={}",
            self.generation,
            digest,
            self.grid.live_count(),
            self.history.len()
        );

        let signal = match reason {
            Some(reason) => {
                info!("stop at generation {}: {:?}", self.generation, reason);
                self.last_stop_reason = Some(reason);
                Signal::Stop
            }
            None => Signal::Continue,
        };
        self.last_signal = Some(signal);
        signal
    }

    fn at_checkpoint(&self) -> bool {
        self.generation % self.mod_1 == 0 && self.generation % self.mod_2 == 0
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }

    /// Number of ticks performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cells(&self) -> usize {
        self.grid.live_count()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Retained digests, oldest first.
    pub fn digest_history(&self) -> Vec<u64> {
        self.history.to_vec()
    }

    /// `None` before the first tick.
    pub fn last_signal(&self) -> Option<Signal> {
        self.last_signal
    }

    /// Reason for the most recent `Stop`, if any tick has stopped.
    pub fn last_stop_reason(&self) -> Option<StopReason> {
        self.last_stop_reason
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
