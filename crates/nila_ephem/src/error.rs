//! Error type for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris and horizon computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// The requested epoch is outside the validity window of the analytic
    /// theory. Carries the offending JD.
    OutOfRange { jd: f64 },
    /// The ascendant is not meaningfully defined at this latitude.
    AscendantUndefined { latitude_deg: f64 },
    /// A crossing bracket did not contain the target angle.
    BadBracket { lo: f64, hi: f64, target_deg: f64 },
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { jd } => {
                write!(f, "epoch outside analytic theory range: JD {jd}")
            }
            Self::AscendantUndefined { latitude_deg } => {
                write!(f, "ascendant undefined at latitude {latitude_deg}")
            }
            Self::BadBracket { lo, hi, target_deg } => {
                write!(f, "bracket [{lo}, {hi}] does not contain target {target_deg} deg")
            }
        }
    }
}

impl Error for EphemError {}
