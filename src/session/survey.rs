//! Classify every registered pattern, one board per rayon task

use crate::game_of_life::{classify, Behavior, GridError, Pattern};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of evolving a single registered pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyEntry {
    pub pattern: String,
    pub cells: usize,
    pub placed_cells: usize,
    pub behavior: Behavior,
}

/// Seed each pattern on its own `rows` x `cols` board and classify it.
///
/// Boards are independent, so they are evolved in parallel; each individual
/// board still steps on a single thread. Results follow registry order.
pub fn survey_patterns(
    rows: usize,
    cols: usize,
    max_generations: usize,
) -> Result<Vec<SurveyEntry>, GridError> {
    Pattern::ALL
        .par_iter()
        .map(|&pattern| -> Result<SurveyEntry, GridError> {
            let grid = pattern.place(rows, cols)?;
            Ok(SurveyEntry {
                pattern: pattern.name().to_string(),
                cells: pattern.cells().len(),
                placed_cells: grid.population(),
                behavior: classify(&grid, max_generations),
            })
        })
        .collect()
}
