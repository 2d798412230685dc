use crate::dynamics::state::FlightState;
use crate::physics::gravity::G_MAGNITUDE;
use super::event::{AscentOutcome, Termination};

// ---------------------------------------------------------------------------
// Ballistic coast from cutoff to apogee
// ---------------------------------------------------------------------------

/// Peak altitude of an unpowered coast from `state` under constant gravity:
/// `h + v^2 / (2 g)`. Drag and horizontal drift are ignored.
pub fn coast_apogee(state: &FlightState) -> f64 {
    let v = state.vertical_velocity();
    state.altitude() + v * v / (2.0 * G_MAGNITUDE)
}

/// Time from `state` to apogee, s. Zero if already descending.
pub fn time_to_apogee(state: &FlightState) -> f64 {
    state.vertical_velocity().max(0.0) / G_MAGNITUDE
}

/// Predicted apogee of a finished trial.
///
/// Ground impact yields the impact altitude, so a failed trial never
/// looks like it reached a target.
pub fn predict_apogee(outcome: &AscentOutcome) -> f64 {
    match outcome.termination {
        Termination::Burnout => coast_apogee(&outcome.state),
        Termination::GroundImpact => outcome.state.altitude(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn coasting(altitude: f64, vv: f64) -> FlightState {
        FlightState {
            vel: Vector2::new(250.0, vv),
            pos: Vector2::new(0.0, altitude),
            ..FlightState::launch()
        }
    }

    #[test]
    fn kinematic_apogee() {
        let s = coasting(40_000.0, 1_000.0);
        assert_eq!(coast_apogee(&s), 40_000.0 + 1_000.0 * 1_000.0 / (2.0 * 9.8));
    }

    #[test]
    fn zero_vertical_velocity_is_at_apogee() {
        let s = coasting(12_345.0, 0.0);
        assert_eq!(coast_apogee(&s), 12_345.0);
        assert_eq!(time_to_apogee(&s), 0.0);
    }

    #[test]
    fn time_to_apogee_from_velocity() {
        let s = coasting(0.0, 98.0);
        assert!((time_to_apogee(&s) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn ground_impact_predicts_impact_altitude() {
        let outcome = AscentOutcome {
            termination: Termination::GroundImpact,
            state: coasting(-0.5, -30.0),
            pitchover_time: None,
        };
        assert_eq!(predict_apogee(&outcome), -0.5);
    }

    #[test]
    fn burnout_uses_coast_formula() {
        let state = coasting(50_000.0, 700.0);
        let outcome = AscentOutcome {
            termination: Termination::Burnout,
            state,
            pitchover_time: Some(3.0),
        };
        assert_eq!(predict_apogee(&outcome), coast_apogee(&state));
    }
}
