//! Simulation front-end support: the interactive session and pattern survey

pub mod controller;
pub mod survey;

pub use controller::Session;
pub use survey::{survey_patterns, SurveyEntry};
