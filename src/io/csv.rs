use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::dynamics::state::FlightState;
use crate::physics::propulsion;
use crate::vehicle::VehicleConfig;

/// One CSV row per recorded state.
#[derive(Debug, Serialize)]
struct TrajectoryRow {
    time: f64,
    altitude: f64,
    downrange: f64,
    vertical_velocity: f64,
    horizontal_velocity: f64,
    speed: f64,
    attitude_deg: f64,
    mass: f64,
}

impl TrajectoryRow {
    fn new(config: &VehicleConfig, s: &FlightState) -> Self {
        Self {
            time: s.elapsed_time,
            altitude: s.altitude(),
            downrange: s.downrange(),
            vertical_velocity: s.vertical_velocity(),
            horizontal_velocity: s.horizontal_velocity(),
            speed: s.speed(),
            attitude_deg: s.attitude.to_degrees(),
            mass: propulsion::mass(config, s.elapsed_time),
        }
    }
}

/// Write trajectory data to CSV format.
///
/// Columns: time, altitude, downrange, vertical_velocity, horizontal_velocity,
///          speed, attitude_deg, mass
pub fn write_trajectory<W: Write>(
    writer: W,
    config: &VehicleConfig,
    trajectory: &[FlightState],
) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for s in trajectory {
        out.serialize(TrajectoryRow::new(config, s))?;
    }
    out.flush()?;
    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file<P: AsRef<Path>>(
    path: P,
    config: &VehicleConfig,
    trajectory: &[FlightState],
) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_trajectory(file, config, trajectory)
}
