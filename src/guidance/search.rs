use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigurationError;
use crate::sim::{predict_apogee, simulate_ascent, AscentOutcome};
use crate::vehicle::VehicleConfig;

// ---------------------------------------------------------------------------
// Pitchover angle search
// ---------------------------------------------------------------------------

/// How candidate angles on the grid `k * angle_step_deg` are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Every grid angle from 0 upward until one meets the target.
    #[default]
    Linear,
    /// Lower-bound bisection over the same grid. Returns the same angle as
    /// `Linear` when apogee is non-decreasing in the pitchover angle.
    Bisection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub angle_step_deg: f64,
    pub max_angle_deg: f64,
    pub method: SearchMethod,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            angle_step_deg: 0.001,
            max_angle_deg: 90.0,
            method: SearchMethod::Linear,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let step = self.angle_step_deg;
        if !(step > 0.0 && step.is_finite()) {
            return Err(ConfigurationError::InvalidAngleStep(step));
        }
        let max = self.max_angle_deg;
        if !(max > 0.0 && max <= 90.0) {
            return Err(ConfigurationError::InvalidMaxAngle(max));
        }
        if max / step >= u64::MAX as f64 {
            return Err(ConfigurationError::TooManyCandidates { step, max });
        }
        Ok(())
    }

    /// Number of grid angles strictly below `max_angle_deg`.
    fn candidate_count(&self) -> u64 {
        let step = self.angle_step_deg;
        let max = self.max_angle_deg;
        let mut n = (max / step).ceil() as u64;
        while n > 0 && (n - 1) as f64 * step >= max {
            n -= 1;
        }
        while (n as f64) * step < max {
            n += 1;
        }
        n
    }

    fn angle_deg(&self, k: u64) -> f64 {
        k as f64 * self.angle_step_deg
    }
}

/// A pitchover angle that meets the target apogee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchoverSolution {
    pub pitchover_angle_deg: f64,
    pub predicted_apogee: f64,
    pub outcome: AscentOutcome,
    pub trials: u64,
}

impl PitchoverSolution {
    pub fn pitchover_angle_rad(&self) -> f64 {
        self.pitchover_angle_deg.to_radians()
    }

    pub fn cutoff_altitude(&self) -> f64 {
        self.outcome.state.altitude()
    }

    pub fn cutoff_speed(&self) -> f64 {
        self.outcome.state.speed()
    }
}

/// Result of [`find_pitchover_angle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchResult {
    Found(PitchoverSolution),
    /// No angle in `[0, max_angle_deg)` met the target.
    Exhausted {
        trials: u64,
        /// Highest predicted apogee among the trials, with its angle.
        best_apogee: f64,
        best_angle_deg: f64,
    },
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn solution(&self) -> Option<&PitchoverSolution> {
        match self {
            SearchResult::Found(s) => Some(s),
            SearchResult::Exhausted { .. } => None,
        }
    }

    pub fn trials(&self) -> u64 {
        match self {
            SearchResult::Found(s) => s.trials,
            SearchResult::Exhausted { trials, .. } => *trials,
        }
    }
}

/// Find the smallest grid angle (deg from horizontal) whose ascent reaches
/// `target_apogee` when pitching over at `pitchover_altitude`.
pub fn find_pitchover_angle(
    config: &VehicleConfig,
    pitchover_altitude: f64,
    target_apogee: f64,
    options: &SearchOptions,
) -> Result<SearchResult, ConfigurationError> {
    options.validate()?;
    if pitchover_altitude.is_nan() {
        return Err(ConfigurationError::NotANumber("pitchover altitude"));
    }
    if target_apogee.is_nan() {
        return Err(ConfigurationError::NotANumber("target apogee"));
    }

    let mut search = Search {
        config,
        pitchover_altitude,
        target_apogee,
        options,
        trials: 0,
        best: None,
    };

    let hit = match options.method {
        SearchMethod::Linear => search.linear(),
        SearchMethod::Bisection => search.bisection(),
    };

    let result = match hit {
        Some((angle_deg, outcome, apogee)) => {
            info!(
                vehicle = %config.name,
                angle_deg,
                apogee,
                trials = search.trials,
                "pitchover angle found"
            );
            SearchResult::Found(PitchoverSolution {
                pitchover_angle_deg: angle_deg,
                predicted_apogee: apogee,
                outcome,
                trials: search.trials,
            })
        }
        None => {
            let (best_angle_deg, best_apogee) = search.best.unwrap_or((0.0, f64::NEG_INFINITY));
            info!(
                vehicle = %config.name,
                target_apogee,
                best_apogee,
                trials = search.trials,
                "pitchover search exhausted"
            );
            SearchResult::Exhausted { trials: search.trials, best_apogee, best_angle_deg }
        }
    };

    Ok(result)
}

struct Search<'a> {
    config: &'a VehicleConfig,
    pitchover_altitude: f64,
    target_apogee: f64,
    options: &'a SearchOptions,
    trials: u64,
    best: Option<(f64, f64)>,
}

impl Search<'_> {
    /// Fly grid angle `k`; returns the outcome, its apogee, and whether it meets the target.
    fn trial(&mut self, k: u64) -> (f64, AscentOutcome, f64, bool) {
        let angle_deg = self.options.angle_deg(k);
        let outcome = simulate_ascent(self.config, self.pitchover_altitude, angle_deg.to_radians());
        let apogee = predict_apogee(&outcome);
        self.trials += 1;

        if self.best.map_or(true, |(_, best)| apogee > best) {
            self.best = Some((angle_deg, apogee));
        }

        debug!(angle_deg, apogee, outcome = outcome.termination.label(), "pitchover trial");
        (angle_deg, outcome, apogee, apogee >= self.target_apogee)
    }

    fn linear(&mut self) -> Option<(f64, AscentOutcome, f64)> {
        for k in 0..self.options.candidate_count() {
            let (angle_deg, outcome, apogee, hit) = self.trial(k);
            if hit {
                return Some((angle_deg, outcome, apogee));
            }
        }
        None
    }

    fn bisection(&mut self) -> Option<(f64, AscentOutcome, f64)> {
        let n = self.options.candidate_count();
        let (mut lo, mut hi) = (0, n);
        let mut found = None;

        // Invariant: every k >= hi that was probed met the target.
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (angle_deg, outcome, apogee, hit) = self.trial(mid);
            if hit {
                hi = mid;
                found = Some((angle_deg, outcome, apogee));
            } else {
                lo = mid + 1;
            }
        }
        found
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
