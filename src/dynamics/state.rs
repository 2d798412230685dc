use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Flight state: time, attitude, velocity, position (2D point mass)
// ---------------------------------------------------------------------------

/// Attitude of a vehicle pointing straight up, rad from horizontal.
pub const VERTICAL: f64 = FRAC_PI_2;

/// State of one trial at a single instant.
/// Frame: x = downrange (horizontal), y = up, origin at the launch site.
///
/// Only [`crate::sim::integrator::euler_step`] advances time, velocity and
/// position; every trial starts from [`FlightState::launch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub step: u64,             // integration steps taken
    pub elapsed_time: f64,     // s
    pub attitude: f64,         // rad from horizontal
    pub vel: Vector2<f64>,     // m/s [horizontal, vertical]
    pub pos: Vector2<f64>,     // m   [downrange, altitude]
}

impl FlightState {
    /// On the pad, pointing up, at rest.
    pub fn launch() -> Self {
        Self {
            step: 0,
            elapsed_time: 0.0,
            attitude: VERTICAL,
            vel: Vector2::zeros(),
            pos: Vector2::zeros(),
        }
    }

    pub fn altitude(&self) -> f64 {
        self.pos.y
    }

    pub fn downrange(&self) -> f64 {
        self.pos.x
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.vel.y
    }

    pub fn horizontal_velocity(&self) -> f64 {
        self.vel.x
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Angle of the velocity vector above horizontal (rad). Vertical at rest.
    pub fn flight_path_angle(&self) -> f64 {
        if self.vel.x == 0.0 && self.vel.y == 0.0 {
            VERTICAL
        } else {
            self.vel.y.atan2(self.vel.x)
        }
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::launch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_state_is_vertical_and_at_rest() {
        let s = FlightState::launch();
        assert_eq!(s.attitude, VERTICAL);
        assert_eq!(s.altitude(), 0.0);
        assert_eq!(s.speed(), 0.0);
        assert_eq!(s.elapsed_time, 0.0);
        assert_eq!(s.step, 0);
    }

    #[test]
    fn speed_combines_components() {
        let s = FlightState { vel: Vector2::new(3.0, 4.0), ..FlightState::launch() };
        assert!((s.speed() - 5.0).abs() < 1e-12);
        assert!((s.flight_path_angle() - (4.0_f64).atan2(3.0)).abs() < 1e-12);
    }
}
