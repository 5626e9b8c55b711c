//! Angular crossing solver.
//!
//! Every limb boundary is the instant some derived angle (elongation,
//! combined longitude, a body's longitude) reaches the next multiple of the
//! limb's span. Callers bracket the event with at least one full expected
//! period and this module bisects on the shortest signed arc to the target.

use crate::error::EphemError;

/// Default angular tolerance in degrees. For the motions involved
/// (≥ 1°/day) this resolves boundaries to well under a minute.
pub const CROSSING_TOL_DEG: f64 = 1e-3;

/// Bisection iteration cap. Hitting it is logged, never surfaced.
const MAX_ITERATIONS: usize = 50;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest signed arc equivalent of an angle, in (-180, 180].
pub fn shortest_signed_arc(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Find the JD in `[lo, hi]` at which `f` crosses `target_deg`.
///
/// `f` maps a JD to an angle in [0, 360) and must be monotone across the
/// bracket once shifted by the target; `target_deg` is reduced mod 360.
/// The tolerance is angular degrees, not days. If the iteration cap is
/// reached the final midpoint is returned and the event logged; the
/// residual is still far below a minute of time.
pub fn find_crossing<F>(lo: f64, hi: f64, target_deg: f64, f: F, tol_deg: f64) -> Result<f64, EphemError>
where
    F: Fn(f64) -> Result<f64, EphemError>,
{
    let mut lo = lo;
    let mut hi = hi;
    let mut diff_lo = shortest_signed_arc(f(lo)? - target_deg);
    let diff_hi = shortest_signed_arc(f(hi)? - target_deg);

    if diff_lo == 0.0 {
        return Ok(lo);
    }
    if diff_hi == 0.0 {
        return Ok(hi);
    }
    if diff_lo.signum() == diff_hi.signum() {
        return Err(EphemError::BadBracket { lo, hi, target_deg });
    }

    let mut mid = 0.5 * (lo + hi);
    for _ in 0..MAX_ITERATIONS {
        mid = 0.5 * (lo + hi);
        let diff_mid = shortest_signed_arc(f(mid)? - target_deg);
        if diff_mid.abs() < tol_deg {
            return Ok(mid);
        }
        if diff_lo.signum() != diff_mid.signum() {
            hi = mid;
        } else {
            lo = mid;
            diff_lo = diff_mid;
        }
    }

    log::warn!("crossing solver hit iteration cap for target {target_deg} deg in [{lo}, {hi}]");
    Ok(mid)
}
