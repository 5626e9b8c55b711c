//! The ephemeris capability trait and its built-in implementation.
//!
//! Everything downstream of this crate (limb engines, day segments, the
//! Lagnam scanner) computes against [`EphemerisProvider`], so a
//! high-precision kernel-backed provider can replace the analytic theory
//! without touching any caller. Provider selection happens once at startup
//! (see [`crate::settings`]).

use crate::ascendant::ascendant_sidereal_deg;
use crate::ayanamsa::lahiri_ayanamsa_deg;
use crate::error::EphemError;
use crate::moon::moon_tropical_longitude;
use crate::riseset::{DiurnalEvent, RiseSetEvent, sun_rise_set};
use crate::sun::sun_tropical_longitude;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Sidereal ephemeris capabilities the engine needs.
///
/// All longitudes are sidereal (Lahiri) degrees in [0, 360); all epochs
/// are JD UT. Implementations must be usable from concurrent workers
/// (`Send + Sync`).
pub trait EphemerisProvider: Send + Sync {
    /// Sidereal longitude of the Sun.
    fn sun_longitude(&self, jd_ut: f64) -> Result<f64, EphemError>;

    /// Sidereal longitude of the Moon.
    fn moon_longitude(&self, jd_ut: f64) -> Result<f64, EphemError>;

    /// Both longitudes, sharing the ayanamsa evaluation.
    fn sun_moon(&self, jd_ut: f64) -> Result<(f64, f64), EphemError> {
        Ok((self.sun_longitude(jd_ut)?, self.moon_longitude(jd_ut)?))
    }

    /// Sunrise for the civil day starting at `day_start_jd` (local
    /// midnight, JD UT).
    fn sunrise(&self, day_start_jd: f64, location: &GeoLocation)
    -> Result<DiurnalEvent, EphemError>;

    /// Sunset for the same civil day.
    fn sunset(&self, day_start_jd: f64, location: &GeoLocation)
    -> Result<DiurnalEvent, EphemError>;

    /// Lahiri ayanamsa in degrees.
    fn ayanamsa(&self, jd_ut: f64) -> f64;

    /// Sidereal longitude of the ascendant.
    fn ascendant(&self, jd_ut: f64, location: &GeoLocation) -> Result<f64, EphemError>;
}

/// Validity window of the analytic theories (years 1000 - 3000).
const VALID_JD_RANGE: std::ops::Range<f64> = 2_086_307.5..2_816_787.5;

fn check_range(jd: f64) -> Result<(), EphemError> {
    if VALID_JD_RANGE.contains(&jd) {
        Ok(())
    } else {
        Err(EphemError::OutOfRange { jd })
    }
}

/// The built-in analytic solar/lunar theory.
///
/// Sun ≈ 0.01°, Moon a few hundredths of a degree: inside the engine's
/// accuracy contract without any ephemeris files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn sun_longitude(&self, jd_ut: f64) -> Result<f64, EphemError> {
        check_range(jd_ut)?;
        Ok((sun_tropical_longitude(jd_ut) - lahiri_ayanamsa_deg(jd_ut)).rem_euclid(360.0))
    }

    fn moon_longitude(&self, jd_ut: f64) -> Result<f64, EphemError> {
        check_range(jd_ut)?;
        Ok((moon_tropical_longitude(jd_ut) - lahiri_ayanamsa_deg(jd_ut)).rem_euclid(360.0))
    }

    fn sun_moon(&self, jd_ut: f64) -> Result<(f64, f64), EphemError> {
        check_range(jd_ut)?;
        let aya = lahiri_ayanamsa_deg(jd_ut);
        let sun = (sun_tropical_longitude(jd_ut) - aya).rem_euclid(360.0);
        let moon = (moon_tropical_longitude(jd_ut) - aya).rem_euclid(360.0);
        Ok((sun, moon))
    }

    fn sunrise(
        &self,
        day_start_jd: f64,
        location: &GeoLocation,
    ) -> Result<DiurnalEvent, EphemError> {
        check_range(day_start_jd)?;
        sun_rise_set(day_start_jd, location, RiseSetEvent::Sunrise)
    }

    fn sunset(
        &self,
        day_start_jd: f64,
        location: &GeoLocation,
    ) -> Result<DiurnalEvent, EphemError> {
        check_range(day_start_jd)?;
        sun_rise_set(day_start_jd, location, RiseSetEvent::Sunset)
    }

    fn ayanamsa(&self, jd_ut: f64) -> f64 {
        lahiri_ayanamsa_deg(jd_ut)
    }

    fn ascendant(&self, jd_ut: f64, location: &GeoLocation) -> Result<f64, EphemError> {
        check_range(jd_ut)?;
        ascendant_sidereal_deg(jd_ut, location)
    }
}
