//! Interactive simulation state: the board, generation counter and play controls

use crate::config::{Settings, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::game_of_life::{random_grid, toggle_cell, Cell, GameOfLifeRules, Grid, GridError, Pattern};
use std::time::Duration;

/// Mixes the base seed so consecutive randomizations differ but stay reproducible
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Holds the current board for a front end and applies user actions to it.
///
/// Stepping is double-buffered: the next generation is written into a
/// scratch grid of the same size and the two are swapped, so the board a
/// renderer borrowed is never modified mid-step.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    scratch: Grid,
    generation: u64,
    running: bool,
    interval: Duration,
    alive_probability: f64,
    seed: Option<u64>,
    randomizations: u64,
}

impl Session {
    /// Create a paused session with an empty board
    pub fn new(settings: &Settings) -> Result<Self, GridError> {
        let grid = Grid::new(settings.board.rows, settings.board.cols)?;
        if !(0.0..=1.0).contains(&settings.random.alive_probability) {
            return Err(GridError::InvalidProbability(settings.random.alive_probability));
        }

        Ok(Self {
            scratch: grid.clone(),
            grid,
            generation: 0,
            running: false,
            interval: Duration::from_millis(
                settings.simulation.interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS),
            ),
            alive_probability: settings.random.alive_probability,
            seed: settings.random.seed,
            randomizations: 0,
        })
    }

    /// The board to render
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance one generation
    pub fn step(&mut self) {
        // Every board a session holds is built with the session's dimensions
        debug_assert_eq!(self.grid.dimensions(), self.scratch.dimensions());
        GameOfLifeRules::write_next(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// Advance `generations` steps
    pub fn run_for(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
        tracing::debug!(generation = self.generation, population = self.grid.population(), "advanced");
    }

    /// Flip one cell. The generation counter is left alone.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = toggle_cell(&self.grid, row, col)?;
        Ok(())
    }

    /// Kill every cell, reset the counter and pause
    pub fn clear(&mut self) {
        self.grid.cells_mut().fill(Cell::Dead);
        self.reset();
        tracing::debug!("board cleared");
    }

    /// Replace the board with a random one, reset the counter and pause
    pub fn randomize(&mut self) -> Result<(), GridError> {
        let seed = self
            .seed
            .map(|seed| seed.wrapping_add(self.randomizations.wrapping_mul(SEED_STRIDE)));
        let (rows, cols) = self.grid.dimensions();
        self.grid = random_grid(rows, cols, self.alive_probability, seed)?;
        self.randomizations += 1;
        self.reset();
        tracing::debug!(?seed, population = self.grid.population(), "board randomized");
        Ok(())
    }

    /// Replace the board with a named pattern, reset the counter and pause.
    ///
    /// An unknown name leaves the session untouched.
    pub fn load_pattern(&mut self, name: &str) -> Result<(), GridError> {
        let pattern = Pattern::from_name(name)?;
        let (rows, cols) = self.grid.dimensions();
        self.grid = pattern.place(rows, cols)?;
        self.reset();
        tracing::debug!(%pattern, "pattern loaded");
        Ok(())
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flip between playing and paused, returning the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Set the tick interval, clamped to the supported range
    pub fn set_interval(&mut self, millis: u64) -> Duration {
        self.interval = Duration::from_millis(millis.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS));
        self.interval
    }

    fn reset(&mut self) {
        self.generation = 0;
        self.running = false;
    }
}
