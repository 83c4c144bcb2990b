//! Toroidal cell grid: construction, cell access, neighbour counting and text
//! rendering.

use std::fmt;

use super::digest::digest_cells;
use crate::config::cell_count;
use crate::error::Result;

pub const ALIVE_GLYPH: char = '◼';
pub const DEAD_GLYPH: char = '◻';

/// A fixed-size grid whose edges wrap in both directions.
///
/// Cells are stored row-major; `cells.len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<bool>,
}

/// Seed rule: alive iff the linear index is a multiple of 2 or of 7.
#[inline]
fn seed_alive(index: usize) -> bool {
    index % 2 == 0 || index % 7 == 0
}

impl Grid {
    /// Create a grid filled with the deterministic seed pattern.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let mut grid = Self::dead(width, height)?;
        for (i, cell) in grid.cells.iter_mut().enumerate() {
            *cell = seed_alive(i);
        }
        Ok(grid)
    }

    /// Create a grid with every cell dead.
    pub fn dead(width: i64, height: i64) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Grid {
            width: width as usize,
            height: height as usize,
            cells: vec![false; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Linear index of an in-bounds coordinate.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Read a cell. Out-of-bounds coordinates read as dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        self.cells[self.index_of(row, col)]
    }

    /// Write a cell. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if !self.in_bounds(row, col) {
            return;
        }
        let idx = self.index_of(row, col);
        self.cells[idx] = alive;
    }

    /// Count live cells among the 8 neighbours, wrapping at every edge.
    ///
    /// `row` and `col` are taken modulo height and width.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let row = row % self.height;
        let col = col % self.width;
        let mut count = 0;

        // Adding `len - 1` is a step of -1 modulo `len`.
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }

                let nr = (row + delta_row) % self.height;
                let nc = (col + delta_col) % self.width;
                count += self.cells[self.index_of(nr, nc)] as u8;
            }
        }

        count
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// One line per row, one glyph per cell, each row ending in `'\n'`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Deterministic 64-bit hash of the dimensions and every cell.
    pub fn digest(&self) -> u64 {
        digest_cells(self.width, self.height, &self.cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.width) {
            for &cell in line {
                let symbol = if cell { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
