use crate::physics::atmosphere::SEA_LEVEL_PRESSURE;
use crate::vehicle::VehicleConfig;

// ---------------------------------------------------------------------------
// Single-engine propulsion: pressure-dependent thrust, linear mass flow
// ---------------------------------------------------------------------------

/// Thrust (N) at a given ambient pressure (Pa).
///
/// Linear in pressure: vacuum thrust at 0 Pa, sea-level thrust at 101 325 Pa,
/// extrapolated outside that range.
pub fn thrust(config: &VehicleConfig, pressure: f64) -> f64 {
    let fraction = pressure / SEA_LEVEL_PRESSURE;
    config.thrust_vacuum + (config.thrust_sea_level - config.thrust_vacuum) * fraction
}

/// Vehicle mass (kg) after `elapsed` seconds of burn. Never below dry mass.
pub fn mass(config: &VehicleConfig, elapsed: f64) -> f64 {
    (config.wet_mass + config.burn_rate() * elapsed).max(config.dry_mass)
}
