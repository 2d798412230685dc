use tracing::debug;

use crate::dynamics::state::FlightState;
use crate::vehicle::VehicleConfig;
use super::event::{AscentEvent, AscentOutcome, AscentPhase, EventKind, Termination};
use super::integrator::euler_step;

// ---------------------------------------------------------------------------
// Two-phase ascent: vertical climb, pitchover, fixed-pitch climb
// ---------------------------------------------------------------------------

/// Full record of a single ascent.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub outcome: AscentOutcome,
    /// Every state from launch to termination, inclusive.
    pub states: Vec<FlightState>,
    pub events: Vec<AscentEvent>,
}

/// Fly one trial from a fresh launch state until burnout or ground impact.
///
/// `pitchover_altitude` in m (`f64::INFINITY` never pitches over),
/// `pitchover_angle` in rad from horizontal.
pub fn simulate_ascent(
    config: &VehicleConfig,
    pitchover_altitude: f64,
    pitchover_angle: f64,
) -> AscentOutcome {
    fly(config, pitchover_altitude, pitchover_angle, |_, _| {})
}

/// Same as [`simulate_ascent`], keeping every state and the discrete events.
pub fn simulate_trajectory(
    config: &VehicleConfig,
    pitchover_altitude: f64,
    pitchover_angle: f64,
) -> Trajectory {
    let capacity = (config.burn_duration * config.update_frequency) as usize + 2;
    let mut states = Vec::with_capacity(capacity.min(1_000_000));
    let mut events = Vec::new();

    let launch = FlightState::launch();
    states.push(launch);
    events.push(AscentEvent { time: 0.0, kind: EventKind::Launch, state: launch });

    let outcome = fly(config, pitchover_altitude, pitchover_angle, |state, event| {
        if let Some(kind) = event {
            events.push(AscentEvent { time: state.elapsed_time, kind, state: *state });
        }
        // Pitchover is reported on the pre-step state, which is already recorded.
        if event != Some(EventKind::Pitchover) {
            states.push(*state);
        }
    });

    Trajectory { outcome, states, events }
}

/// Core loop. `observe` sees each post-step state (with a terminal event on
/// the last one) and the pre-step state at pitchover.
fn fly<F>(
    config: &VehicleConfig,
    pitchover_altitude: f64,
    pitchover_angle: f64,
    mut observe: F,
) -> AscentOutcome
where
    F: FnMut(&FlightState, Option<EventKind>),
{
    let mut state = FlightState::launch();
    let mut phase = AscentPhase::VerticalAscent;
    let mut pitchover_time = None;

    loop {
        if phase == AscentPhase::VerticalAscent && state.altitude() >= pitchover_altitude {
            phase = AscentPhase::PitchedOver;
            state.attitude = pitchover_angle;
            pitchover_time = Some(state.elapsed_time);
            debug!(
                t = state.elapsed_time,
                altitude = state.altitude(),
                angle_deg = pitchover_angle.to_degrees(),
                "pitchover"
            );
            observe(&state, Some(EventKind::Pitchover));
        }

        state = euler_step(config, &state, phase.attitude_mode());

        let termination = if state.altitude() < 0.0 {
            Some(Termination::GroundImpact)
        } else if state.elapsed_time > config.burn_duration {
            Some(Termination::Burnout)
        } else {
            None
        };

        observe(&state, termination.map(EventKind::from));

        if let Some(termination) = termination {
            debug!(
                t = state.elapsed_time,
                altitude = state.altitude(),
                outcome = termination.label(),
                "ascent terminated"
            );
            return AscentOutcome { termination, state, pitchover_time };
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::VERTICAL;
    use crate::vehicle::{presets, VehicleConfig};

    fn underpowered() -> VehicleConfig {
        VehicleConfig::builder("Underpowered")
            .update_frequency(20.0)
            .wet_mass(9665.0)
            .dry_mass(3072.0)
            .thrust(1000.0)
            .burn_duration(142.0)
            .build()
            .unwrap()
    }

    #[test]
    fn nominal_ascent_burns_out() {
        let v = presets::rox();
        let out = simulate_ascent(&v, 20.0, 70.0_f64.to_radians());
        assert_eq!(out.termination, Termination::Burnout);
        assert!(out.state.elapsed_time > v.burn_duration);
        assert!(out.state.elapsed_time <= v.burn_duration + v.time_step() + 1e-9);
        assert!(out.state.altitude() > 20.0);
    }

    #[test]
    fn attitude_held_after_pitchover() {
        let v = presets::rox();
        let angle = 65.0_f64.to_radians();
        let out = simulate_ascent(&v, 20.0, angle);
        assert_eq!(out.state.attitude, angle);
        assert!(out.pitchover_time.is_some());
    }

    #[test]
    fn underpowered_vehicle_hits_ground() {
        let v = underpowered();
        let out = simulate_ascent(&v, 20.0, 45.0_f64.to_radians());
        assert_eq!(out.termination, Termination::GroundImpact);
        assert!(out.state.altitude() < 0.0);
        assert!(out.state.elapsed_time < v.burn_duration);
        assert_eq!(out.pitchover_time, None);
    }

    #[test]
    fn low_pitchover_angle_hits_ground() {
        let v = presets::rox();
        let out = simulate_ascent(&v, 20.0, 10.0_f64.to_radians());
        assert!(out.is_ground_impact());
        assert!(out.impact_time().unwrap() < v.burn_duration);
    }

    #[test]
    fn vertical_pitchover_matches_never_pitching() {
        let v = presets::rox();
        let pitched = simulate_ascent(&v, 20.0, 90.0_f64.to_radians());
        let never = simulate_ascent(&v, f64::INFINITY, 0.3);
        assert_eq!(pitched.termination, never.termination);
        assert_eq!(pitched.state.vel, never.state.vel);
        assert_eq!(pitched.state.pos, never.state.pos);
        assert_eq!(pitched.state.attitude, VERTICAL);
        assert_eq!(never.state.attitude, VERTICAL);
        assert_eq!(never.pitchover_time, None);
    }

    #[test]
    fn zero_pitchover_altitude_pitches_on_the_pad() {
        let v = presets::rox();
        let out = simulate_ascent(&v, 0.0, 80.0_f64.to_radians());
        assert_eq!(out.pitchover_time, Some(0.0));
    }

    #[test]
    fn fresh_state_each_trial() {
        let v = presets::rox();
        let a = simulate_ascent(&v, 20.0, 75.0_f64.to_radians());
        let _ = simulate_ascent(&v, 20.0, 30.0_f64.to_radians());
        let b = simulate_ascent(&v, 20.0, 75.0_f64.to_radians());
        assert_eq!(a, b);
    }

    #[test]
    fn trajectory_matches_outcome() {
        let v = presets::rox();
        let angle = 70.0_f64.to_radians();
        let traj = simulate_trajectory(&v, 20.0, angle);
        let out = simulate_ascent(&v, 20.0, angle);
        assert_eq!(traj.outcome, out);
        assert_eq!(traj.states.last().copied(), Some(out.state));
        assert_eq!(traj.states.len() as u64, out.state.step + 1);

        let kinds: Vec<EventKind> = traj.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Launch, EventKind::Pitchover, EventKind::Burnout]);
    }

    #[test]
    fn trajectory_records_ground_impact() {
        let traj = simulate_trajectory(&underpowered(), 20.0, 1.0);
        let last = traj.events.last().unwrap();
        assert_eq!(last.kind, EventKind::GroundImpact);
        assert!(last.state.altitude() < 0.0);
    }
}
