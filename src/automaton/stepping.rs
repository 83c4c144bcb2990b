//! Generation stepping with B3/S23 rules on a torus.
//!
//! Every output cell reads only the frozen generation-N buffer, so rows can be
//! computed in any order (or in parallel) and the result is the same.

use rayon::prelude::*;

use super::grid::Grid;

/// Grids with at least this many cells are stepped row-parallel on the rayon
/// global pool. Smaller grids are cheaper to step on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

/// B3/S23 transition for one cell.
///
/// - Survival: a live cell with 2 or 3 neighbours stays alive
/// - Birth: a dead cell with exactly 3 neighbours becomes alive
/// - Everything else is dead in the next generation
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

fn step_row(grid: &Grid, row: usize, out: &mut [bool]) {
    for (col, slot) in out.iter_mut().enumerate() {
        let current = grid.cells[grid.index_of(row, col)];
        *slot = next_state(current, grid.neighbor_count(row, col));
    }
}

/// Step one generation on the calling thread.
pub fn step_sequential(grid: &mut Grid) {
    let width = grid.width();
    let mut next_cells = vec![false; grid.cells.len()];

    for (row, out) in next_cells.chunks_mut(width).enumerate() {
        step_row(grid, row, out);
    }

    grid.cells = next_cells;
}

/// Step one generation with one rayon task per row.
pub fn step_parallel(grid: &mut Grid) {
    let width = grid.width();
    let mut next_cells = vec![false; grid.cells.len()];

    {
        let frozen: &Grid = grid;
        next_cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| step_row(frozen, row, out));
    }

    grid.cells = next_cells;
}

impl Grid {
    /// Replace the cells with the next generation.
    pub fn step(&mut self) {
        if self.cells.len() >= PARALLEL_THRESHOLD {
            step_parallel(self);
        } else {
            step_sequential(self);
        }
    }
}
