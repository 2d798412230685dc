pub mod config;
pub mod dynamics;
pub mod error;
pub mod guidance;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;

// Flat re-exports of the computational surface
pub use dynamics::state::FlightState;
pub use error::ConfigurationError;
pub use guidance::{find_pitchover_angle, PitchoverSolution, SearchMethod, SearchOptions, SearchResult};
pub use sim::{predict_apogee, simulate_ascent, simulate_trajectory, AscentOutcome, Termination};
pub use vehicle::VehicleConfig;
