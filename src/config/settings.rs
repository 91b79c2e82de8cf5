//! Configuration settings for the Game of Life simulator

use crate::game_of_life::DEFAULT_ALIVE_PROBABILITY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bounds of the tick interval, matching the play-speed slider
pub const MIN_INTERVAL_MS: u64 = 50;
pub const MAX_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub random: RandomConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    pub alive_probability: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub style: DisplayStyle,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    Compact,
    Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig { rows: 50, cols: 50 },
            random: RandomConfig {
                alive_probability: DEFAULT_ALIVE_PROBABILITY,
                seed: None,
            },
            simulation: SimulationConfig {
                generations: 10,
                interval_ms: 100,
            },
            output: OutputConfig {
                style: DisplayStyle::Compact,
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.rows == 0 || self.board.cols == 0 {
            anyhow::bail!(
                "Board dimensions must be positive (got {}x{})",
                self.board.rows,
                self.board.cols
            );
        }

        if !(0.0..=1.0).contains(&self.random.alive_probability) {
            anyhow::bail!(
                "Alive probability must be within [0, 1] (got {})",
                self.random.alive_probability
            );
        }

        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.simulation.interval_ms) {
            anyhow::bail!(
                "Interval must be between {} and {} ms (got {})",
                MIN_INTERVAL_MS,
                MAX_INTERVAL_MS,
                self.simulation.interval_ms
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.board.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.board.cols = cols;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.simulation.interval_ms = interval_ms;
        }
        if let Some(probability) = cli_overrides.alive_probability {
            self.random.alive_probability = probability;
        }
        if cli_overrides.seed.is_some() {
            self.random.seed = cli_overrides.seed;
        }
        if let Some(style) = cli_overrides.style {
            self.output.style = style;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations: Option<usize>,
    pub interval_ms: Option<u64>,
    pub alive_probability: Option<f64>,
    pub seed: Option<u64>,
    pub style: Option<DisplayStyle>,
    pub format: Option<OutputFormat>,
}
