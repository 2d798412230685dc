use crate::dynamics;
use crate::dynamics::state::{FlightState, VERTICAL};
use crate::vehicle::VehicleConfig;

// ---------------------------------------------------------------------------
// Fixed-step explicit Euler integrator
// ---------------------------------------------------------------------------

/// How the attitude evolves over a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttitudeMode {
    /// Attitude follows the velocity vector (vertical while horizontal velocity is zero).
    Free,
    /// Attitude stays at the commanded value already in the state.
    Held,
}

/// Single Euler step: advance state by `1 / update_frequency`.
///
/// Both acceleration components come from the state at the start of the step.
/// Velocity is updated first and altitude integrates the new velocity.
pub fn euler_step(config: &VehicleConfig, state: &FlightState, mode: AttitudeMode) -> FlightState {
    let f = config.update_frequency;
    let accel = dynamics::acceleration(config, state);

    let vel = state.vel + accel / f;
    let pos = state.pos + vel / f;

    let attitude = match mode {
        AttitudeMode::Free => velocity_attitude(vel.x, vel.y),
        AttitudeMode::Held => state.attitude,
    };

    let step = state.step + 1;
    FlightState {
        step,
        elapsed_time: step as f64 / f,
        attitude,
        vel,
        pos,
    }
}

/// Attitude along the velocity vector; vertical while horizontal velocity is zero.
fn velocity_attitude(horizontal: f64, vertical: f64) -> f64 {
    if horizontal == 0.0 {
        VERTICAL
    } else {
        (vertical / horizontal).atan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::gravity::GRAVITY;
    use crate::vehicle::presets;
    use nalgebra::Vector2;

    #[test]
    fn first_step_stays_vertical() {
        let v = presets::rox();
        let s = euler_step(&v, &FlightState::launch(), AttitudeMode::Free);
        assert_eq!(s.attitude, VERTICAL);
        assert_eq!(s.horizontal_velocity(), 0.0);
        assert!(s.vertical_velocity() > 0.0);
        assert_eq!(s.step, 1);
        assert!((s.elapsed_time - 0.05).abs() < 1e-12);
    }

    #[test]
    fn altitude_integrates_updated_velocity() {
        let v = presets::rox();
        let s = euler_step(&v, &FlightState::launch(), AttitudeMode::Free);
        let accel = v.thrust_sea_level / v.wet_mass + GRAVITY;
        let vv = accel / v.update_frequency;
        assert!((s.vertical_velocity() - vv).abs() < 1e-12);
        assert!((s.altitude() - vv / v.update_frequency).abs() < 1e-12);
    }

    #[test]
    fn held_attitude_is_not_recomputed() {
        let v = presets::rox();
        let start = FlightState {
            attitude: 0.4,
            vel: Vector2::new(10.0, 50.0),
            pos: Vector2::new(0.0, 100.0),
            ..FlightState::launch()
        };
        let s = euler_step(&v, &start, AttitudeMode::Held);
        assert_eq!(s.attitude, 0.4);
    }

    #[test]
    fn free_attitude_follows_velocity() {
        let v = presets::rox();
        let start = FlightState {
            attitude: 1.2,
            vel: Vector2::new(40.0, 80.0),
            pos: Vector2::new(0.0, 100.0),
            ..FlightState::launch()
        };
        let s = euler_step(&v, &start, AttitudeMode::Free);
        let expected = (s.vertical_velocity() / s.horizontal_velocity()).atan();
        assert_eq!(s.attitude, expected);
    }

    #[test]
    fn both_axes_use_start_of_step_attitude() {
        // Horizontal acceleration must come from the starting attitude, not the
        // attitude recomputed from the new velocity.
        let v = presets::rox();
        let start = FlightState {
            attitude: 0.9,
            vel: Vector2::new(100.0, 20.0),
            pos: Vector2::new(0.0, 1_000.0),
            ..FlightState::launch()
        };
        let s = euler_step(&v, &start, AttitudeMode::Free);
        let a = dynamics::acceleration(&v, &start);
        assert!((s.horizontal_velocity() - (100.0 + a.x / v.update_frequency)).abs() < 1e-12);
        assert!((s.vertical_velocity() - (20.0 + a.y / v.update_frequency)).abs() < 1e-12);
    }
}
