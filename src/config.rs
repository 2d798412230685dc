//! Run files: a vehicle plus search parameters, in TOML.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ConfigurationError;
use crate::guidance::{SearchMethod, SearchOptions};
use crate::vehicle::VehicleConfig;

/// A complete run: which vehicle, and what to search for.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub vehicle: VehicleConfig,
    #[serde(default)]
    pub search: SearchSpec,
}

/// Search parameters as written in a run file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchSpec {
    pub pitchover_altitude: f64,  // m
    pub target_apogee: f64,       // m
    pub angle_step_deg: f64,
    pub max_angle_deg: f64,
    pub method: SearchMethod,
}

impl Default for SearchSpec {
    fn default() -> Self {
        let options = SearchOptions::default();
        Self {
            pitchover_altitude: 20.0,
            target_apogee: 100_000.0,
            angle_step_deg: options.angle_step_deg,
            max_angle_deg: options.max_angle_deg,
            method: options.method,
        }
    }
}

impl SearchSpec {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            angle_step_deg: self.angle_step_deg,
            max_angle_deg: self.max_angle_deg,
            method: self.method,
        }
    }
}

/// Errors that can occur while loading run files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read run file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid search parameters: {0}")]
    Invalid(#[from] ConfigurationError),
}

/// Parse a run file from TOML text. The vehicle is validated while parsing.
pub fn parse_run(contents: &str) -> Result<RunConfig, LoadError> {
    let run: RunConfig = toml::from_str(contents)?;
    run.search.options().validate()?;
    Ok(run)
}

/// Load a run file from disk.
pub fn load_run<P: AsRef<Path>>(path: P) -> Result<RunConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    parse_run(&contents)
}
