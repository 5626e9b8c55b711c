//! Lagnam scanner: the rising sign over the 24-hour cycle.
//!
//! Walks one day from sunrise in 10-minute steps, computing the sidereal
//! ascendant's rasi at each step and collapsing runs of the same sign
//! into intervals. A sign can recur near the end of the cycle. Per-step
//! ascendant failures are skipped; an empty result is legal at extreme
//! latitudes.

use nila_ephem::{EphemerisProvider, GeoLocation};
use nila_vedic::{BilingualName, rasi_from_longitude, rasi_name};

/// One run of a rising sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnamInterval {
    /// 1-based rasi index.
    pub rasi_index: u8,
    pub name: BilingualName,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Scan step: 10 minutes.
const STEP_JD: f64 = 1.0 / 144.0;

/// Steps in a full day.
const STEPS: usize = 144;

/// Walk [sunrise, sunrise + 1 day] and collapse equal-sign runs.
pub fn lagnam_intervals<P: EphemerisProvider>(
    eph: &P,
    sunrise_jd: f64,
    location: &GeoLocation,
) -> Vec<LagnamInterval> {
    let mut intervals: Vec<LagnamInterval> = Vec::new();
    let mut open: Option<(u8, f64)> = None;

    for step in 0..=STEPS {
        let jd = sunrise_jd + step as f64 * STEP_JD;
        let rasi = match eph.ascendant(jd, location) {
            Ok(lon) => rasi_from_longitude(lon).index,
            Err(e) => {
                log::debug!("lagnam step at JD {jd} skipped: {e}");
                continue;
            }
        };

        match open {
            None => open = Some((rasi, jd)),
            Some((current, start_jd)) if current != rasi => {
                intervals.push(LagnamInterval {
                    rasi_index: current,
                    name: rasi_name(current),
                    start_jd,
                    end_jd: jd,
                });
                open = Some((rasi, jd));
            }
            Some(_) => {}
        }
    }

    if let Some((current, start_jd)) = open {
        intervals.push(LagnamInterval {
            rasi_index: current,
            name: rasi_name(current),
            start_jd,
            end_jd: sunrise_jd + 1.0,
        });
    }

    intervals
}
