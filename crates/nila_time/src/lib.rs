//! Civil-time plumbing for the panchangam engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions (Meeus reduction)
//! - Civil date × IANA zone → JD UT, and JD UT → zone-local rendering
//! - ΔT (TT − UT) approximation for feeding the analytic theories
//! - Weekday indexing and HH:MM / HH:MM:SS formatting helpers
//!
//! All Julian Dates crossing this API are JD UT. The sub-second difference
//! between UTC and UT1 is ignored; it is far below the one-minute reporting
//! tolerance of the almanac.

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod zoned;

pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, civil_to_jd, jd_to_civil};
pub use zoned::{
    date_to_jd, format_hm, format_hms, jd_to_zoned, parse_zone, start_of_day, weekday_index,
};
