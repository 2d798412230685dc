use serde::Deserialize;

use crate::error::ConfigurationError;

// ---------------------------------------------------------------------------
// Vehicle definition (single stage, fixed burn)
// ---------------------------------------------------------------------------

/// Immutable vehicle parameters. Construct through [`VehicleConfig::new`] or
/// [`VehicleConfigBuilder`]; both validate before anything is simulated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "VehicleRecord")]
pub struct VehicleConfig {
    pub name: String,
    pub update_frequency: f64,  // Hz
    pub wet_mass: f64,          // kg
    pub dry_mass: f64,          // kg
    pub thrust_vacuum: f64,     // N
    pub thrust_sea_level: f64,  // N
    pub burn_duration: f64,     // s
}

impl VehicleConfig {
    pub fn new(
        name: impl Into<String>,
        update_frequency: f64,
        wet_mass: f64,
        dry_mass: f64,
        thrust_sea_level: f64,
        thrust_vacuum: f64,
        burn_duration: f64,
    ) -> Result<Self, ConfigurationError> {
        if !(update_frequency > 0.0 && update_frequency.is_finite()) {
            return Err(ConfigurationError::NonPositiveFrequency(update_frequency));
        }
        if !(burn_duration > 0.0 && burn_duration.is_finite()) {
            return Err(ConfigurationError::NonPositiveBurnDuration(burn_duration));
        }
        if !(dry_mass > 0.0 && dry_mass.is_finite()) {
            return Err(ConfigurationError::NonPositiveMass { name: "dry mass", value: dry_mass });
        }
        if !(dry_mass < wet_mass) {
            return Err(ConfigurationError::MassOrdering { wet_mass, dry_mass });
        }
        if !wet_mass.is_finite() {
            return Err(ConfigurationError::NonPositiveMass { name: "wet mass", value: wet_mass });
        }
        if !(thrust_sea_level > 0.0 && thrust_sea_level.is_finite()) {
            return Err(ConfigurationError::NonPositiveThrust {
                name: "sea-level thrust",
                value: thrust_sea_level,
            });
        }
        if !(thrust_vacuum > 0.0 && thrust_vacuum.is_finite()) {
            return Err(ConfigurationError::NonPositiveThrust {
                name: "vacuum thrust",
                value: thrust_vacuum,
            });
        }

        Ok(Self {
            name: name.into(),
            update_frequency,
            wet_mass,
            dry_mass,
            thrust_vacuum,
            thrust_sea_level,
            burn_duration,
        })
    }

    pub fn builder(name: impl Into<String>) -> VehicleConfigBuilder {
        VehicleConfigBuilder::new(name)
    }

    /// Propellant consumption rate, kg/s (negative).
    pub fn burn_rate(&self) -> f64 {
        (self.dry_mass - self.wet_mass) / self.burn_duration
    }

    /// Integration step, s.
    pub fn time_step(&self) -> f64 {
        1.0 / self.update_frequency
    }

    pub fn propellant_mass(&self) -> f64 {
        self.wet_mass - self.dry_mass
    }

    /// Thrust-to-weight ratio on the pad.
    pub fn liftoff_twr(&self) -> f64 {
        self.thrust_sea_level / (self.wet_mass * crate::physics::gravity::G_MAGNITUDE)
    }
}

/// Unvalidated form, as it appears in run files.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    #[serde(default = "default_name")]
    pub name: String,
    pub update_frequency: f64,
    pub wet_mass: f64,
    pub dry_mass: f64,
    pub thrust_sea_level: f64,
    pub thrust_vacuum: f64,
    pub burn_duration: f64,
}

fn default_name() -> String {
    "unnamed".into()
}

impl TryFrom<VehicleRecord> for VehicleConfig {
    type Error = ConfigurationError;

    fn try_from(r: VehicleRecord) -> Result<Self, Self::Error> {
        VehicleConfig::new(
            r.name,
            r.update_frequency,
            r.wet_mass,
            r.dry_mass,
            r.thrust_sea_level,
            r.thrust_vacuum,
            r.burn_duration,
        )
    }
}

// ---------------------------------------------------------------------------
// Vehicle builder
// ---------------------------------------------------------------------------

pub struct VehicleConfigBuilder {
    name: String,
    update_frequency: f64,
    wet_mass: f64,
    dry_mass: f64,
    thrust_sea_level: f64,
    thrust_vacuum: f64,
    burn_duration: f64,
}

impl VehicleConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            update_frequency: 20.0,
            wet_mass: 1000.0,
            dry_mass: 400.0,
            thrust_sea_level: 20_000.0,
            thrust_vacuum: 22_000.0,
            burn_duration: 60.0,
        }
    }

    pub fn update_frequency(mut self, v: f64) -> Self { self.update_frequency = v; self }
    pub fn wet_mass(mut self, v: f64) -> Self { self.wet_mass = v; self }
    pub fn dry_mass(mut self, v: f64) -> Self { self.dry_mass = v; self }
    pub fn thrust_sea_level(mut self, v: f64) -> Self { self.thrust_sea_level = v; self }
    pub fn thrust_vacuum(mut self, v: f64) -> Self { self.thrust_vacuum = v; self }
    pub fn burn_duration(mut self, v: f64) -> Self { self.burn_duration = v; self }

    /// Same thrust at every pressure.
    pub fn thrust(self, v: f64) -> Self {
        self.thrust_sea_level(v).thrust_vacuum(v)
    }

    pub fn build(self) -> Result<VehicleConfig, ConfigurationError> {
        VehicleConfig::new(
            self.name,
            self.update_frequency,
            self.wet_mass,
            self.dry_mass,
            self.thrust_sea_level,
            self.thrust_vacuum,
            self.burn_duration,
        )
    }
}

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::VehicleConfig;

    /// Names accepted by [`by_name`].
    pub const NAMES: &[&str] = &["rox", "rs112"];

    /// Kerosene/LOX booster, 142 s burn.
    pub fn rox() -> VehicleConfig {
        VehicleConfig {
            name: "Rox".into(),
            update_frequency: 20.0,
            wet_mass: 9665.0,
            dry_mass: 3072.0,
            thrust_vacuum: 123_600.0,
            thrust_sea_level: 112_900.0,
            burn_duration: 142.0,
        }
    }

    /// Smaller booster, 95 s burn.
    pub fn rs112() -> VehicleConfig {
        VehicleConfig {
            name: "RS112".into(),
            update_frequency: 20.0,
            wet_mass: 5272.0,
            dry_mass: 1133.0,
            thrust_vacuum: 98_500.0,
            thrust_sea_level: 88_400.0,
            burn_duration: 95.0,
        }
    }

    pub fn by_name(name: &str) -> Option<VehicleConfig> {
        match name.to_ascii_lowercase().as_str() {
            "rox" => Some(rox()),
            "rs112" => Some(rs112()),
            _ => None,
        }
    }
}
