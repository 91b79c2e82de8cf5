//! Conway's Game of Life
//!
//! A fixed-size, hard-edged Game of Life engine: grid model, neighbor
//! counting, whole-board transitions, pattern seeding and pure mutators,
//! plus a UI-agnostic [`Session`] controller for front ends.

pub mod config;
pub mod game_of_life;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, GameOfLifeRules, Grid, GridError, Pattern};
pub use session::Session;

use anyhow::{Context, Result};

/// Seed a session from `settings` and evolve it for the configured number of generations
pub fn simulate(settings: &Settings, pattern: Option<&str>, random: bool) -> Result<Session> {
    let mut session = Session::new(settings).context("Failed to create session")?;

    if let Some(name) = pattern {
        session
            .load_pattern(name)
            .with_context(|| format!("Failed to load pattern {}", name))?;
    } else if random {
        session.randomize().context("Failed to randomize board")?;
    }

    session.run_for(settings.simulation.generations);
    Ok(session)
}
