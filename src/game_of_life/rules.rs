//! Conway's transition rules and whole-board evolution

use super::{Cell, Grid, GridError};

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a single cell given its current state and live neighbor count
    pub fn next_state(current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 0..=1) => Cell::Dead,  // underpopulation
            (Cell::Alive, 2..=3) => Cell::Alive, // survival
            (Cell::Alive, _) => Cell::Dead,      // overpopulation
            (Cell::Dead, 3) => Cell::Alive,      // reproduction
            (Cell::Dead, _) => Cell::Dead,
        }
    }

    /// Evolve the grid one generation forward, returning a new grid
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::write_next(current, &mut next);
        next
    }

    /// Evolve `current` into `next` without allocating.
    ///
    /// `next` must have the same dimensions; its previous contents are
    /// overwritten. Callers swap the two buffers between steps.
    pub fn evolve_into(current: &Grid, next: &mut Grid) -> Result<(), GridError> {
        if current.dimensions() != next.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected_rows: current.rows(),
                expected_cols: current.cols(),
                actual_rows: next.rows(),
                actual_cols: next.cols(),
            });
        }
        Self::write_next(current, next);
        Ok(())
    }

    /// Write the next generation of `current` into `next`.
    ///
    /// Callers guarantee both grids share dimensions.
    pub(crate) fn write_next(current: &Grid, next: &mut Grid) {
        let cols = current.cols();
        for (idx, (cell, out)) in current
            .cells()
            .iter()
            .zip(next.cells_mut().iter_mut())
            .enumerate()
        {
            let neighbors = current.neighbors_unchecked(idx / cols, idx % cols);
            *out = Self::next_state(*cell, neighbors);
        }
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        let mut scratch = grid.clone();
        for _ in 0..generations {
            Self::write_next(&current, &mut scratch);
            std::mem::swap(&mut current, &mut scratch);
        }
        current
    }
}
