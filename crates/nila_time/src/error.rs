//! Error type for calendar and zone conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-time parsing and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Zone identifier is not a known IANA zone.
    InvalidZone(String),
    /// The local civil time does not exist in the zone (DST gap) and
    /// could not be resolved.
    UnresolvableLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
            Self::InvalidZone(s) => write!(f, "unknown IANA zone: {s}"),
            Self::UnresolvableLocalTime(s) => write!(f, "unresolvable local time: {s}"),
        }
    }
}

impl Error for TimeError {}
