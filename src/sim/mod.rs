pub mod apogee;
pub mod event;
pub mod integrator;
pub mod runner;

pub use apogee::{coast_apogee, predict_apogee, time_to_apogee};
pub use event::{AscentEvent, AscentOutcome, AscentPhase, EventKind, Termination};
pub use integrator::{euler_step, AttitudeMode};
pub use runner::{simulate_ascent, simulate_trajectory, Trajectory};
