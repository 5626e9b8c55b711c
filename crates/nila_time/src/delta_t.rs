//! ΔT = TT − UT approximation.
//!
//! Piecewise polynomial fit from Espenak & Meeus ("Five Millennium Canon of
//! Solar Eclipses", NASA/TP-2006-214141), restricted to the segments the
//! almanac can reach (19th century onward). Accuracy is a few seconds, far
//! below the one-minute reporting tolerance.

use crate::julian::{SECONDS_PER_DAY, jd_to_civil};

/// ΔT in seconds for a given calendar year (with fraction).
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1986.0 {
        // Parabolic long-term trend, anchored at 1820. A few seconds off
        // across the 20th century, which the almanac tolerates.
        let u = (year - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if year < 2005.0 {
        let t = year - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t;
    }
    if year < 2050.0 {
        let t = year - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t * t;
    }
    if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year);
    }
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Convert a JD in UT to a JD in TT by applying ΔT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    let (year, month, _) = jd_to_civil(jd_ut);
    let y = year as f64 + (month as f64 - 0.5) / 12.0;
    jd_ut + delta_t_seconds(y) / SECONDS_PER_DAY
}
