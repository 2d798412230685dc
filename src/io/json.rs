use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::guidance::SearchResult;
use crate::sim::{predict_apogee, time_to_apogee, AscentOutcome};
use crate::vehicle::VehicleConfig;

/// Cutoff conditions of a single ascent, as exported.
#[derive(Debug, Clone, Serialize)]
pub struct AscentSummary {
    pub vehicle: String,
    pub termination: &'static str,
    pub time_s: f64,
    pub altitude_m: f64,
    pub downrange_m: f64,
    pub vertical_velocity_m_s: f64,
    pub horizontal_velocity_m_s: f64,
    pub speed_m_s: f64,
    pub predicted_apogee_m: f64,
    pub time_to_apogee_s: f64,
    pub pitchover_time_s: Option<f64>,
    pub impact_time_s: Option<f64>,
}

impl AscentSummary {
    pub fn from_outcome(config: &VehicleConfig, outcome: &AscentOutcome) -> Self {
        let s = &outcome.state;
        Self {
            vehicle: config.name.clone(),
            termination: outcome.termination.label(),
            time_s: s.elapsed_time,
            altitude_m: s.altitude(),
            downrange_m: s.downrange(),
            vertical_velocity_m_s: s.vertical_velocity(),
            horizontal_velocity_m_s: s.horizontal_velocity(),
            speed_m_s: s.speed(),
            predicted_apogee_m: predict_apogee(outcome),
            time_to_apogee_s: if outcome.is_ground_impact() { 0.0 } else { time_to_apogee(s) },
            pitchover_time_s: outcome.pitchover_time,
            impact_time_s: outcome.impact_time(),
        }
    }
}

/// Search result, as exported.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub vehicle: String,
    pub pitchover_altitude_m: f64,
    pub target_apogee_m: f64,
    pub found: bool,
    pub trials: u64,
    pub pitchover_angle_deg: Option<f64>,
    pub predicted_apogee_m: Option<f64>,
    pub best_apogee_m: Option<f64>,
    pub cutoff: Option<AscentSummary>,
}

impl SearchSummary {
    pub fn new(
        config: &VehicleConfig,
        pitchover_altitude: f64,
        target_apogee: f64,
        result: &SearchResult,
    ) -> Self {
        let solution = result.solution();
        let best_apogee_m = match result {
            SearchResult::Exhausted { best_apogee, .. } => Some(*best_apogee),
            SearchResult::Found(_) => None,
        };
        Self {
            vehicle: config.name.clone(),
            pitchover_altitude_m: pitchover_altitude,
            target_apogee_m: target_apogee,
            found: result.is_found(),
            trials: result.trials(),
            pitchover_angle_deg: solution.map(|s| s.pitchover_angle_deg),
            predicted_apogee_m: solution.map(|s| s.predicted_apogee),
            best_apogee_m,
            cutoff: solution.map(|s| AscentSummary::from_outcome(config, &s.outcome)),
        }
    }
}

/// Write any summary as pretty-printed JSON.
pub fn write_summary<W: Write, T: Serialize>(writer: W, summary: &T) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, summary)
}

/// Write a summary to a JSON file at the given path.
pub fn write_summary_file<P: AsRef<Path>, T: Serialize>(
    path: P,
    summary: &T,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_summary(file, summary)?;
    Ok(())
}
