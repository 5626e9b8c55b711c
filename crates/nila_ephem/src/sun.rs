//! Analytic solar theory.
//!
//! Geocentric apparent longitude of the Sun from the mean elements and the
//! equation of center, with nutation and aberration applied. Accuracy is
//! about 0.01°, comfortably inside the 1′ contract for tithi work.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 22 and 25.

use nila_time::{J2000_JD, jd_ut_to_tt};

use crate::solver::normalize_360;

/// Julian centuries of TT since J2000.0.
fn centuries(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36525.0
}

/// Longitude of the Moon's mean ascending node, degrees.
fn ascending_node_deg(t: f64) -> f64 {
    normalize_360(125.04452 - 1934.136261 * t)
}

/// Mean obliquity of the ecliptic, degrees (Laskar polynomial, truncated).
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = centuries(jd_tt);
    23.439_291_111 - 0.013_004_167 * t - 0.000_000_164 * t * t + 0.000_000_504 * t * t * t
}

/// Nutation in longitude Δψ, degrees (principal terms of IAU 1980).
pub fn nutation_longitude_deg(jd_tt: f64) -> f64 {
    let t = centuries(jd_tt);
    let omega = ascending_node_deg(t).to_radians();
    let l_sun = normalize_360(280.4665 + 36000.7698 * t).to_radians();
    let l_moon = normalize_360(218.3165 + 481267.8813 * t).to_radians();
    (-17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin())
        / 3600.0
}

/// Geocentric apparent (true equinox of date) longitude of the Sun,
/// degrees in [0, 360), at a JD TT.
pub fn sun_apparent_longitude_tt(jd_tt: f64) -> f64 {
    let t = centuries(jd_tt);

    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    // Aberration and nutation via the node term (Meeus 25.8)
    let omega = ascending_node_deg(t).to_radians();
    normalize_360(true_lon - 0.00569 - 0.00478 * omega.sin())
}

/// Geocentric apparent tropical longitude of the Sun at a JD UT.
pub fn sun_tropical_longitude(jd_ut: f64) -> f64 {
    sun_apparent_longitude_tt(jd_ut_to_tt(jd_ut))
}

/// Apparent right ascension and declination of the Sun at a JD UT,
/// radians. Used by the sunrise/sunset hour-angle iteration.
pub fn sun_apparent_ra_dec(jd_ut: f64) -> (f64, f64) {
    let jd_tt = jd_ut_to_tt(jd_ut);
    let t = centuries(jd_tt);
    let lambda = sun_apparent_longitude_tt(jd_tt).to_radians();
    // True obliquity including the principal nutation term
    let omega = ascending_node_deg(t).to_radians();
    let eps = (mean_obliquity_deg(jd_tt) + 0.00256 * omega.cos()).to_radians();

    let ra = f64::atan2(eps.cos() * lambda.sin(), lambda.cos()).rem_euclid(std::f64::consts::TAU);
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra, dec)
}
