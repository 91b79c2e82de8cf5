//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, DisplayStyle, OutputConfig, OutputFormat, RandomConfig,
    Settings, SimulationConfig, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};
