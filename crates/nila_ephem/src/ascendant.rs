//! Sidereal ascendant (Lagnam) computation.
//!
//! The ecliptic longitude rising on the eastern horizon, from local
//! sidereal time, mean obliquity and latitude, converted to the sidereal
//! frame by subtracting the Lahiri ayanamsa.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 14.

use std::f64::consts::TAU;

use nila_time::jd_ut_to_tt;

use crate::ayanamsa::lahiri_ayanamsa_deg;
use crate::error::EphemError;
use crate::provider::GeoLocation;
use crate::sidereal::{gmst_rad, local_sidereal_time_rad};
use crate::sun::mean_obliquity_deg;

/// The formula degenerates as tan(φ) blows up at the poles.
const MAX_LATITUDE_DEG: f64 = 89.9;

/// Tropical ascendant in radians from a pre-computed RAMC (= LST).
///
/// `Asc = atan2(cos RAMC, -(sin RAMC·cos ε + tan φ·sin ε))`, in [0, 2π).
fn ascendant_from_ramc(ramc: f64, latitude_rad: f64, eps: f64) -> f64 {
    f64::atan2(
        ramc.cos(),
        -(ramc.sin() * eps.cos() + latitude_rad.tan() * eps.sin()),
    )
    .rem_euclid(TAU)
}

/// Sidereal (Lahiri) ecliptic longitude of the ascendant, degrees in
/// [0, 360), at a JD UT for the given location.
pub fn ascendant_sidereal_deg(jd_ut: f64, location: &GeoLocation) -> Result<f64, EphemError> {
    if location.latitude_deg.abs() > MAX_LATITUDE_DEG {
        return Err(EphemError::AscendantUndefined {
            latitude_deg: location.latitude_deg,
        });
    }

    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    let eps = mean_obliquity_deg(jd_ut_to_tt(jd_ut)).to_radians();
    let tropical = ascendant_from_ramc(lst, location.latitude_rad(), eps).to_degrees();
    Ok((tropical - lahiri_ayanamsa_deg(jd_ut)).rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 0.409_092_8; // ~23.439° in radians

    #[test]
    fn aries_culminating_cancer_rising() {
        // RAMC = 0 at the equator: the rising point is 90° of RA east of
        // the meridian, ecliptic longitude 90°.
        let asc = ascendant_from_ramc(0.0, 0.0, EPS);
        assert!(
            (asc - PI / 2.0).abs() < 1e-10,
            "Asc = {}°",
            asc.to_degrees()
        );
    }

    #[test]
    fn ramc_90_libra_rising() {
        let asc = ascendant_from_ramc(PI / 2.0, 0.0, EPS);
        assert!((asc - PI).abs() < 1e-10, "Asc = {}°", asc.to_degrees());
    }

    #[test]
    fn full_circle_sweep() {
        // Over one sidereal rotation the ascendant covers the whole zodiac
        let phi = 13.0827_f64.to_radians();
        let mut seen = [false; 12];
        for i in 0..720 {
            let ramc = TAU * i as f64 / 720.0;
            let asc = ascendant_from_ramc(ramc, phi, EPS);
            seen[(asc.to_degrees() / 30.0).floor() as usize % 12] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing signs: {seen:?}");
    }

    #[test]
    fn polar_latitude_rejected() {
        let loc = GeoLocation {
            latitude_deg: 89.95,
            longitude_deg: 0.0,
        };
        let err = ascendant_sidereal_deg(2_460_700.5, &loc).unwrap_err();
        assert!(matches!(err, EphemError::AscendantUndefined { .. }));
    }

    #[test]
    fn sidereal_offset_applied() {
        let loc = GeoLocation {
            latitude_deg: 13.0827,
            longitude_deg: 80.2707,
        };
        let jd = 2_460_700.5;
        let sid = ascendant_sidereal_deg(jd, &loc).unwrap();
        assert!((0.0..360.0).contains(&sid));
    }
}
