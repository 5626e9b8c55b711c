//! Sidereal ephemeris for the panchangam engine.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] capability trait the rest of the engine
//!   computes against
//! - A built-in analytic solar/lunar theory (Sun ≈ 0.01°, Moon well inside
//!   0.5°), sufficient to place tithi boundaries to the minute
//! - Lahiri (Chitrapaksha) ayanamsa
//! - Sunrise/sunset by hour-angle iteration, with polar day/night detection
//! - Sidereal ascendant from local sidereal time and obliquity
//! - The bracketed angular-crossing solver used by every limb engine
//!
//! All public Julian Dates are JD UT; TT is internal to the theories.

pub mod ascendant;
pub mod ayanamsa;
pub mod error;
pub mod moon;
pub mod provider;
pub mod riseset;
pub mod settings;
pub mod sidereal;
pub mod solver;
pub mod sun;

pub use ascendant::ascendant_sidereal_deg;
pub use ayanamsa::lahiri_ayanamsa_deg;
pub use error::EphemError;
pub use moon::moon_tropical_longitude;
pub use provider::{AnalyticEphemeris, EphemerisProvider, GeoLocation};
pub use riseset::{DiurnalEvent, RiseSetEvent, sun_rise_set};
pub use settings::{EphemerisSettings, configure, configure_from_env, settings};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use solver::{find_crossing, normalize_360, shortest_signed_arc, CROSSING_TOL_DEG};
pub use sun::{sun_apparent_ra_dec, sun_tropical_longitude};
