//! Behavior classification for seeded boards (still lifes, oscillators, spaceships)

use super::{GameOfLifeRules, Grid};
use serde::Serialize;
use std::fmt;

/// Long-run behavior observed while evolving a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Behavior {
    /// Unchanged after one generation
    StillLife,
    /// Returns to the initial board after `period` generations
    Oscillator { period: usize },
    /// Repeats its shape after `period` generations, shifted by (rows, cols)
    Spaceship {
        period: usize,
        displacement: (isize, isize),
    },
    /// Every cell died at `generation`
    Extinct { generation: usize },
    /// No repetition found within the generations examined
    Unsettled,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::StillLife => write!(f, "still life"),
            Behavior::Oscillator { period } => write!(f, "oscillator (period {})", period),
            Behavior::Spaceship {
                period,
                displacement: (dr, dc),
            } => write!(f, "spaceship (period {}, moves {:+},{:+})", period, dr, dc),
            Behavior::Extinct { generation } => write!(f, "extinct at generation {}", generation),
            Behavior::Unsettled => write!(f, "unsettled"),
        }
    }
}

/// Smallest rectangle holding every live cell, as (min_row, min_col, max_row, max_col)
pub fn bounding_box(grid: &Grid) -> Option<(usize, usize, usize, usize)> {
    let living = grid.living_cells();
    let (first_row, _) = *living.first()?;
    let (last_row, _) = *living.last()?;
    let min_col = living.iter().map(|&(_, c)| c).min()?;
    let max_col = living.iter().map(|&(_, c)| c).max()?;
    Some((first_row, min_col, last_row, max_col))
}

/// Live cells translated so the bounding box starts at (0, 0), plus the original origin
fn normalized_shape(grid: &Grid) -> Option<(Vec<(usize, usize)>, (usize, usize))> {
    let (min_row, min_col, _, _) = bounding_box(grid)?;
    let shape = grid
        .living_cells()
        .into_iter()
        .map(|(r, c)| (r - min_row, c - min_col))
        .collect();
    Some((shape, (min_row, min_col)))
}

/// Evolve `grid` for up to `max_generations`, reporting the first repetition found
pub fn classify(grid: &Grid, max_generations: usize) -> Behavior {
    let Some((initial_shape, (origin_r, origin_c))) = normalized_shape(grid) else {
        return Behavior::Extinct { generation: 0 };
    };

    let mut current = grid.clone();
    for generation in 1..=max_generations {
        current = GameOfLifeRules::evolve(&current);

        if current == *grid {
            return if generation == 1 {
                Behavior::StillLife
            } else {
                Behavior::Oscillator { period: generation }
            };
        }

        match normalized_shape(&current) {
            None => return Behavior::Extinct { generation },
            Some((shape, (r, c))) if shape == initial_shape => {
                return Behavior::Spaceship {
                    period: generation,
                    displacement: (r as isize - origin_r as isize, c as isize - origin_c as isize),
                };
            }
            Some(_) => {}
        }
    }

    Behavior::Unsettled
}
