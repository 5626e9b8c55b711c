//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! Needed for hour angles (sunrise/sunset) and the ascendant. Takes JD UT;
//! the sub-second UTC/UT1 difference is ignored.
//!
//! Sources: ERA from IERS Conventions 2010, Eq. 5.15; GMST polynomial from
//! Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use nila_time::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal turns per solar day.
pub const SIDEREAL_RATIO: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle at a JD UT, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + SIDEREAL_RATIO * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a JD UT, radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / 36525.0;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.1, "ERA at J2000 = {deg}");
    }

    #[test]
    fn gmst_at_j2000_midnight() {
        // 2000-01-01 0h UT: GMST ≈ 6h 39m 51s ≈ 99.97°
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.97).abs() < 0.1, "GMST = {deg}");
    }

    #[test]
    fn ranges() {
        for &jd in &[2_451_544.5, 2_460_000.5, 2_440_000.5] {
            assert!((0.0..TAU).contains(&earth_rotation_angle_rad(jd)));
            assert!((0.0..TAU).contains(&gmst_rad(jd)));
        }
    }

    #[test]
    fn lst_wraps() {
        let lst = local_sidereal_time_rad(6.0, 1.0);
        assert!((lst - (7.0 - TAU)).abs() < 1e-12);
    }
}
