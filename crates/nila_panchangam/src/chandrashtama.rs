//! Chandrashtama: the Moon transiting the eighth rasi from the birth
//! Moon sign.
//!
//! The birth Moon rasi is the sign containing the birth nakshatra's
//! starting degree. When the transiting Moon at sunrise occupies the
//! eighth sign from it, the condition is active and the window is the
//! Moon's entry/exit of that sign, found by crossing search up to three
//! days either side.

use nila_ephem::{CROSSING_TOL_DEG, EphemerisProvider, find_crossing, normalize_360};
use nila_vedic::{
    BilingualName, nakshatra_index_by_name, nakshatra_start_degree, rasi_from_longitude, rasi_name,
};

use crate::error::PanchangamError;

/// An active Chandrashtama window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChandrashtamaRecord {
    /// 1-based birth nakshatra index.
    pub birth_nakshatra_index: u8,
    /// 1-based birth Moon rasi.
    pub birth_rasi_index: u8,
    /// 1-based rasi under Chandrashtama (the 8th from birth).
    pub rasi_index: u8,
    pub rasi_name: BilingualName,
    /// JD UT of the Moon's entry into the rasi.
    pub start_jd: f64,
    /// JD UT of the Moon's exit from the rasi.
    pub end_jd: f64,
}

/// Moon rasi search window, days either side of the reference.
const MOON_RASI_WINDOW_DAYS: f64 = 3.0;

/// Resolve a birth star name to its 1-based index, or reject the input.
pub fn birth_nakshatra_index(name: &str) -> Result<u8, PanchangamError> {
    nakshatra_index_by_name(name)
        .ok_or_else(|| PanchangamError::InvalidInput(format!("unknown birth nakshatra '{name}'")))
}

/// Chandrashtama rasi (1-based) for a birth nakshatra index.
pub fn chandrashtama_rasi(birth_nakshatra: u8) -> (u8, u8) {
    let start = nakshatra_start_degree(birth_nakshatra);
    let birth_rasi = (start / 30.0).floor() as u8 + 1;
    let target = (birth_rasi - 1 + 7) % 12 + 1;
    (birth_rasi, target)
}

/// Evaluate the Chandrashtama condition at `ref_jd` (sunrise).
///
/// Returns `None` when the transiting Moon is outside the target rasi.
pub fn chandrashtama_at<P: EphemerisProvider>(
    eph: &P,
    ref_jd: f64,
    birth_nakshatra: &str,
) -> Result<Option<ChandrashtamaRecord>, PanchangamError> {
    let nak_index = birth_nakshatra_index(birth_nakshatra)?;
    let (birth_rasi, target) = chandrashtama_rasi(nak_index);

    let moon = eph
        .moon_longitude(ref_jd)
        .map_err(|e| PanchangamError::at(ref_jd, e))?;
    if rasi_from_longitude(moon).index != target {
        return Ok(None);
    }

    let entry_deg = (target - 1) as f64 * 30.0;
    let exit_deg = normalize_360(entry_deg + 30.0);

    let f = |jd: f64| eph.moon_longitude(jd);
    let start_jd = find_crossing(
        ref_jd - MOON_RASI_WINDOW_DAYS,
        ref_jd,
        entry_deg,
        f,
        CROSSING_TOL_DEG,
    )
    .map_err(|e| PanchangamError::at(ref_jd, e))?;
    let end_jd = find_crossing(
        ref_jd,
        ref_jd + MOON_RASI_WINDOW_DAYS,
        exit_deg,
        f,
        CROSSING_TOL_DEG,
    )
    .map_err(|e| PanchangamError::at(ref_jd, e))?;

    Ok(Some(ChandrashtamaRecord {
        birth_nakshatra_index: nak_index,
        birth_rasi_index: birth_rasi,
        rasi_index: target,
        rasi_name: rasi_name(target),
        start_jd,
        end_jd,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nila_ephem::AnalyticEphemeris;

    #[test]
    fn rohini_eighth_house() {
        // Rohini starts at 40° → birth rasi Rishabam (2) → 8th is Dhanusu (9)
        let (birth, target) = chandrashtama_rasi(4);
        assert_eq!(birth, 2);
        assert_eq!(target, 9);
    }

    #[test]
    fn ashwini_eighth_house() {
        // Ashwini → Mesham (1) → Vrichigam (8)
        let (birth, target) = chandrashtama_rasi(1);
        assert_eq!(birth, 1);
        assert_eq!(target, 8);
    }

    #[test]
    fn revathi_wraps() {
        // Revathi starts at 346.67° → Meenam (12) → 8th wraps to Katakam (7)
        let (birth, target) = chandrashtama_rasi(27);
        assert_eq!(birth, 12);
        assert_eq!(target, 7);
    }

    #[test]
    fn unknown_star_rejected() {
        let err = birth_nakshatra_index("Sirius").unwrap_err();
        assert!(matches!(err, PanchangamError::InvalidInput(_)));
    }

    #[test]
    fn active_iff_moon_in_target() {
        let eph = AnalyticEphemeris::new();
        let ref_jd = 2_460_700.75;
        let moon = eph.moon_longitude(ref_jd).unwrap();
        let moon_rasi = rasi_from_longitude(moon).index;

        let result = chandrashtama_at(&eph, ref_jd, "Rohini").unwrap();
        match result {
            Some(rec) => {
                assert_eq!(rec.rasi_index, 9);
                assert_eq!(moon_rasi, 9);
                assert!(rec.start_jd < ref_jd);
                assert!(rec.end_jd > ref_jd);
                // The Moon spends roughly 2-3 days in a sign
                let span = rec.end_jd - rec.start_jd;
                assert!((1.8..3.2).contains(&span), "span = {span}");
            }
            None => assert_ne!(moon_rasi, 9),
        }
    }

    #[test]
    fn exactly_one_birth_sign_active_any_day() {
        // One representative star per birth rasi: whatever sign the Moon
        // occupies, exactly one of the twelve sees Chandrashtama today.
        let eph = AnalyticEphemeris::new();
        let ref_jd = 2_460_712.3;
        let per_rasi_stars = [
            "Ashwini",      // Mesham
            "Rohini",       // Rishabam
            "Thiruvathirai", // Mithunam
            "Poosam",       // Katakam
            "Magam",        // Simmam
            "Hastham",      // Kanni
            "Swathi",       // Thulam
            "Anusham",      // Vrichigam
            "Moolam",       // Dhanusu
            "Thiruvonam",   // Makaram
            "Sathayam",     // Kumbam
            "Revathi",      // Meenam
        ];
        let active = per_rasi_stars
            .iter()
            .filter(|star| chandrashtama_at(&eph, ref_jd, star).unwrap().is_some())
            .count();
        assert_eq!(active, 1, "one birth sign per transit sign must match");
    }
}
