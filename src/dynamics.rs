pub mod state;

use nalgebra::Vector2;

use crate::physics::{atmosphere, gravity::GRAVITY, propulsion};
use crate::vehicle::VehicleConfig;
use state::{FlightState, VERTICAL};

// ---------------------------------------------------------------------------
// Equations of motion (2D point mass, no drag)
// ---------------------------------------------------------------------------

/// Unit thrust direction for an attitude (rad from horizontal).
///
/// The vertical attitude maps to exactly (0, 1): `cos(FRAC_PI_2)` is not
/// zero in f64, and a vertical vehicle must not gain horizontal velocity.
pub fn thrust_direction(attitude: f64) -> Vector2<f64> {
    if attitude == VERTICAL {
        Vector2::y()
    } else {
        let (sin, cos) = attitude.sin_cos();
        Vector2::new(cos, sin)
    }
}

/// Acceleration (m/s^2, [horizontal, vertical]) from a single state snapshot.
///
/// Forces modeled:
///   1. Thrust: pressure-dependent magnitude, along the attitude
///   2. Gravity: uniform, down
pub fn acceleration(config: &VehicleConfig, state: &FlightState) -> Vector2<f64> {
    let pressure = atmosphere::pressure(state.altitude());
    let thrust = propulsion::thrust(config, pressure);
    let mass = propulsion::mass(config, state.elapsed_time);
    let a0 = thrust / mass;

    thrust_direction(state.attitude) * a0 + Vector2::new(0.0, GRAVITY)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
