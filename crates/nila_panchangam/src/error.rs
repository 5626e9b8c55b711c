//! Error surface of the daily-report engine.
//!
//! The orchestrator is the only place where errors become outcomes: lower
//! layers return values or typed errors, and `daily()` maps everything to
//! this enum. Solver non-convergence is never surfaced (the solver returns
//! its final midpoint and logs), and a missing diurnal event is a report
//! flag, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

use nila_ephem::EphemError;
use nila_time::TimeError;

/// Errors the daily-report engine can surface.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangamError {
    /// Malformed or out-of-range request field. The request is rejected
    /// whole.
    InvalidInput(String),
    /// The ephemeris back-end failed for a specific epoch.
    Ephemeris { jd: f64, source: EphemError },
}

impl PanchangamError {
    /// Wrap an ephemeris error with the epoch that provoked it.
    pub fn at(jd: f64, source: EphemError) -> Self {
        Self::Ephemeris { jd, source }
    }
}

impl Display for PanchangamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Ephemeris { jd, source } => {
                write!(f, "ephemeris failure at JD {jd}: {source}")
            }
        }
    }
}

impl Error for PanchangamError {}

impl From<TimeError> for PanchangamError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
