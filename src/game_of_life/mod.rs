//! Game of Life core functionality

pub mod analysis;
pub mod error;
pub mod grid;
pub mod mutators;
pub mod patterns;
pub mod rules;

pub use analysis::{classify, Behavior};
pub use error::GridError;
pub use grid::{Cell, Grid};
pub use mutators::{random_grid, toggle_cell, DEFAULT_ALIVE_PROBABILITY};
pub use patterns::{load_pattern, Pattern};
pub use rules::GameOfLifeRules;
