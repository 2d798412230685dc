use thiserror::Error;

/// Invalid vehicle or search parameters. Raised before any simulation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("dry mass ({dry_mass} kg) must be less than wet mass ({wet_mass} kg)")]
    MassOrdering { wet_mass: f64, dry_mass: f64 },

    #[error("{name} must be positive and finite, got {value} kg")]
    NonPositiveMass { name: &'static str, value: f64 },

    #[error("burn duration must be positive and finite, got {0} s")]
    NonPositiveBurnDuration(f64),

    #[error("update frequency must be positive and finite, got {0} Hz")]
    NonPositiveFrequency(f64),

    #[error("{name} must be positive and finite, got {value} N")]
    NonPositiveThrust { name: &'static str, value: f64 },

    #[error("angle step must be positive and finite, got {0} deg")]
    InvalidAngleStep(f64),

    #[error("angle step {step} deg yields too many candidates below {max} deg")]
    TooManyCandidates { step: f64, max: f64 },

    #[error("max angle must lie in (0, 90] deg, got {0}")]
    InvalidMaxAngle(f64),

    #[error("{0} must not be NaN")]
    NotANumber(&'static str),
}
