// ---------------------------------------------------------------------------
// Uniform gravity field
// ---------------------------------------------------------------------------

/// Vertical gravitational acceleration, m/s^2 (negative = down).
pub const GRAVITY: f64 = -9.8;

/// Magnitude of `GRAVITY`, m/s^2.
pub const G_MAGNITUDE: f64 = 9.8;
