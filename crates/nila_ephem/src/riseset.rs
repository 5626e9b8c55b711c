//! Sunrise and sunset by hour-angle iteration.
//!
//! Computes the instant the Sun's center reaches the standard 50′
//! depression (34′ refraction + 16′ semidiameter) below the geometric
//! horizon, starting from an approximate local noon and refining the hour
//! angle. Polar day and polar night fall out of the `cos H₀` bound check.
//!
//! Sources: standard spherical astronomy (Meeus, Montenbruck & Pfleger).

use std::f64::consts::{PI, TAU};

use crate::error::EphemError;
use crate::provider::GeoLocation;
use crate::sidereal::{SIDEREAL_RATIO, gmst_rad, local_sidereal_time_rad};
use crate::sun::sun_apparent_ra_dec;

/// Total horizon depression for the solar upper limb, degrees.
const HORIZON_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// Refinement iterations; the correction converges in two or three.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.09 s).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Which horizon event to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

impl RiseSetEvent {
    fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Outcome of a rise/set search for one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiurnalEvent {
    /// The event occurs at this JD UT.
    At(f64),
    /// Polar night: the Sun stays below the horizon all day.
    NeverRises,
    /// Midnight sun: the Sun stays above the horizon all day.
    NeverSets,
}

/// Hour angle of the Sun at a JD UT, normalized to [-π, π].
fn sun_hour_angle(jd_ut: f64, location: &GeoLocation, ra: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    let ha = (lst - ra).rem_euclid(TAU);
    if ha > PI { ha - TAU } else { ha }
}

/// Locate sunrise or sunset for the civil day starting at `day_start_jd`
/// (local midnight, JD UT).
///
/// The search is seeded at civil noon; the transit correction in the first
/// iteration absorbs the offset between civil and solar noon.
pub fn sun_rise_set(
    day_start_jd: f64,
    location: &GeoLocation,
    event: RiseSetEvent,
) -> Result<DiurnalEvent, EphemError> {
    let phi = location.latitude_rad();
    let h0 = (-HORIZON_DEPRESSION_DEG).to_radians();
    let sidereal_rate = TAU * SIDEREAL_RATIO; // rad/day

    let jd_noon = day_start_jd + 0.5;
    let (ra, dec) = sun_apparent_ra_dec(jd_noon);

    let cos_h0 = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h0 > 1.0 {
        return Ok(DiurnalEvent::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(DiurnalEvent::NeverSets);
    }
    let half_arc = cos_h0.acos();

    // Solar transit: correct civil noon by the Sun's hour angle
    let ha_noon = sun_hour_angle(jd_noon, location, ra);
    let jd_transit = jd_noon - ha_noon / sidereal_rate;

    let mut jd_event = if event.is_rising() {
        jd_transit - half_arc / sidereal_rate
    } else {
        jd_transit + half_arc / sidereal_rate
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = sun_apparent_ra_dec(jd_event);

        let cos_h = (h0.sin() - phi.sin() * dec_i.sin()) / (phi.cos() * dec_i.cos());
        if cos_h > 1.0 {
            return Ok(DiurnalEvent::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(DiurnalEvent::NeverSets);
        }
        let h_target = if event.is_rising() {
            -cos_h.acos()
        } else {
            cos_h.acos()
        };

        let ha_actual = sun_hour_angle(jd_event, location, ra_i);
        let mut dha = h_target - ha_actual;
        if dha > PI {
            dha -= TAU;
        } else if dha < -PI {
            dha += TAU;
        }

        let correction = dha / sidereal_rate;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(DiurnalEvent::At(jd_event))
}
