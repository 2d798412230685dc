// ---------------------------------------------------------------------------
// Barometric pressure model (troposphere fit, vacuum above the ceiling)
// ---------------------------------------------------------------------------

pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa

/// Altitude at which the fit reaches zero; vacuum from here up, m.
pub const CEILING: f64 = 44_330.0;

const LAPSE_COEFF: f64 = 2.255_77e-5; // 1/m
const EXPONENT: f64 = 5.255_88;

/// Ambient pressure (Pa) at a given altitude.
///
/// `p = p0 * (1 - 2.25577e-5 h)^5.25588` below the ceiling, 0 at or above it.
/// Negative altitudes are clamped to sea level.
pub fn pressure(altitude: f64) -> f64 {
    let h = altitude.max(0.0);
    if h < CEILING {
        SEA_LEVEL_PRESSURE * (1.0 - LAPSE_COEFF * h).powf(EXPONENT)
    } else {
        0.0
    }
}

/// Pressure as a fraction of sea-level pressure (1.0 on the pad, 0.0 in vacuum).
pub fn pressure_ratio(altitude: f64) -> f64 {
    pressure(altitude) / SEA_LEVEL_PRESSURE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sea_level_is_one_atmosphere() {
        assert_eq!(pressure(0.0), SEA_LEVEL_PRESSURE);
        assert_eq!(pressure_ratio(0.0), 1.0);
    }

    #[test]
    fn vacuum_at_and_above_ceiling() {
        assert_eq!(pressure(CEILING), 0.0);
        assert_eq!(pressure(100_000.0), 0.0);
    }

    #[test]
    fn just_below_ceiling_is_near_vacuum() {
        let p = pressure(CEILING - 1.0);
        assert!(p >= 0.0 && p < 1e-10, "Expected near-vacuum, got {} Pa", p);
    }

    #[test]
    fn tropopause_pressure_plausible() {
        // ~22.6 kPa at 11 km
        let p = pressure(11_000.0);
        assert!((p - 22_632.0).abs() < 200.0, "Got {} Pa", p);
    }

    #[test]
    fn negative_altitude_clamps_to_sea_level() {
        assert_eq!(pressure(-500.0), SEA_LEVEL_PRESSURE);
    }

    proptest! {
        #[test]
        fn pressure_non_increasing(a in 0.0..CEILING, b in 0.0..CEILING) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(pressure(lo) >= pressure(hi));
        }

        #[test]
        fn pressure_within_bounds(h in -1_000.0..200_000.0f64) {
            let p = pressure(h);
            prop_assert!((0.0..=SEA_LEVEL_PRESSURE).contains(&p));
        }
    }
}
