//! Limb engines: the limb active at sunrise and the instant it ends.
//!
//! Each engine reads its angle at the reference JD (local sunrise),
//! classifies it with the pure mappers, and locates the end instant,
//! the next crossing of `index * span`, with the bisection solver.
//! Search windows bracket at least one full event period: two days for
//! tithi, nakshatra and yoga, one day for karana.

use nila_ephem::{CROSSING_TOL_DEG, EphemerisProvider, find_crossing, normalize_360};
use nila_vedic::{
    BilingualName, Graha, KARANA_SPAN_DEG, KaranaKind, NAKSHATRA_SPAN_DEG, Paksha, RasiPosition,
    TITHI_SPAN_DEG, YOGA_SPAN_DEG, YogaNature, karana_from_slot, karana_slot_from_elongation,
    nakshatra_from_longitude, rasi_from_longitude, tithi_from_elongation, tithi_name, yoga_from_sum,
};

use crate::error::PanchangamError;

/// Tithi active at the reference instant, with its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiRecord {
    /// 1-based tithi index (1-30).
    pub index: u8,
    pub name: BilingualName,
    pub paksha: Paksha,
    /// JD UT at which this tithi ends.
    pub end_jd: f64,
    /// Name of the following tithi.
    pub next_name: BilingualName,
}

/// Nakshatra active at the reference instant, with its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraRecord {
    /// 1-based nakshatra index (1-27).
    pub index: u8,
    pub name: BilingualName,
    /// Pada (quarter), 1-4.
    pub pada: u8,
    /// Vimshottari lord of the nakshatra.
    pub lord: Graha,
    pub end_jd: f64,
    pub next_name: BilingualName,
}

/// Yoga active at the reference instant, with its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaRecord {
    /// 1-based yoga index (1-27).
    pub index: u8,
    pub name: BilingualName,
    pub nature: YogaNature,
    pub end_jd: f64,
}

/// Karana active at the reference instant, with its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaRecord {
    /// 1-based index among the 11 karana variants.
    pub index: u8,
    pub name: BilingualName,
    pub kind: KaranaKind,
    pub end_jd: f64,
    pub next_name: BilingualName,
}

/// Moon-Sun elongation at a JD, degrees [0, 360).
pub fn elongation_at<P: EphemerisProvider>(eph: &P, jd: f64) -> Result<f64, PanchangamError> {
    let (sun, moon) = eph.sun_moon(jd).map_err(|e| PanchangamError::at(jd, e))?;
    Ok(normalize_360(moon - sun))
}

/// Combined (sun + moon) sidereal longitude at a JD, degrees [0, 360).
pub fn combined_at<P: EphemerisProvider>(eph: &P, jd: f64) -> Result<f64, PanchangamError> {
    let (sun, moon) = eph.sun_moon(jd).map_err(|e| PanchangamError::at(jd, e))?;
    Ok(normalize_360(sun + moon))
}

/// Tithi at `ref_jd` and the JD at which it yields to the next.
pub fn tithi_at<P: EphemerisProvider>(eph: &P, ref_jd: f64) -> Result<TithiRecord, PanchangamError> {
    let pos = tithi_from_elongation(elongation_at(eph, ref_jd)?);
    let boundary = normalize_360(pos.index as f64 * TITHI_SPAN_DEG);

    let f = |jd: f64| {
        let (sun, moon) = eph.sun_moon(jd)?;
        Ok(normalize_360(moon - sun))
    };
    let end_jd = find_crossing(ref_jd, ref_jd + 2.0, boundary, f, CROSSING_TOL_DEG)
        .map_err(|e| PanchangamError::at(ref_jd, e))?;

    let next_index = pos.index % 30 + 1;
    Ok(TithiRecord {
        index: pos.index,
        name: pos.name,
        paksha: pos.paksha,
        end_jd,
        next_name: tithi_name(next_index),
    })
}

/// Nakshatra at `ref_jd` and the JD at which the Moon leaves it.
pub fn nakshatra_at<P: EphemerisProvider>(
    eph: &P,
    ref_jd: f64,
) -> Result<NakshatraRecord, PanchangamError> {
    let moon = eph
        .moon_longitude(ref_jd)
        .map_err(|e| PanchangamError::at(ref_jd, e))?;
    let pos = nakshatra_from_longitude(moon);
    let boundary = normalize_360(pos.index as f64 * NAKSHATRA_SPAN_DEG);

    let f = |jd: f64| eph.moon_longitude(jd);
    let end_jd = find_crossing(ref_jd, ref_jd + 2.0, boundary, f, CROSSING_TOL_DEG)
        .map_err(|e| PanchangamError::at(ref_jd, e))?;

    let next = nakshatra_from_longitude(boundary + 0.5);
    Ok(NakshatraRecord {
        index: pos.index,
        name: pos.name,
        pada: pos.pada,
        lord: pos.lord,
        end_jd,
        next_name: next.name,
    })
}

/// Yoga at `ref_jd` and the JD at which it ends.
pub fn yoga_at<P: EphemerisProvider>(eph: &P, ref_jd: f64) -> Result<YogaRecord, PanchangamError> {
    let pos = yoga_from_sum(combined_at(eph, ref_jd)?);
    let boundary = normalize_360(pos.index as f64 * YOGA_SPAN_DEG);

    let f = |jd: f64| {
        let (sun, moon) = eph.sun_moon(jd)?;
        Ok(normalize_360(sun + moon))
    };
    let end_jd = find_crossing(ref_jd, ref_jd + 2.0, boundary, f, CROSSING_TOL_DEG)
        .map_err(|e| PanchangamError::at(ref_jd, e))?;

    Ok(YogaRecord {
        index: pos.index,
        name: pos.name,
        nature: pos.nature,
        end_jd,
    })
}

/// Karana at `ref_jd` and the JD at which its half-tithi slot ends.
pub fn karana_at<P: EphemerisProvider>(
    eph: &P,
    ref_jd: f64,
) -> Result<KaranaRecord, PanchangamError> {
    let slot = karana_slot_from_elongation(elongation_at(eph, ref_jd)?);
    let pos = karana_from_slot(slot);
    let boundary = normalize_360(slot as f64 * KARANA_SPAN_DEG);

    let f = |jd: f64| {
        let (sun, moon) = eph.sun_moon(jd)?;
        Ok(normalize_360(moon - sun))
    };
    let end_jd = find_crossing(ref_jd, ref_jd + 1.0, boundary, f, CROSSING_TOL_DEG)
        .map_err(|e| PanchangamError::at(ref_jd, e))?;

    let next = karana_from_slot(slot % 60 + 1);
    Ok(KaranaRecord {
        index: pos.karana.index(),
        name: pos.name,
        kind: pos.kind,
        end_jd,
        next_name: next.name,
    })
}

/// Moon's rasi position at a JD.
pub fn moon_rasi_at<P: EphemerisProvider>(
    eph: &P,
    jd: f64,
) -> Result<RasiPosition, PanchangamError> {
    let moon = eph
        .moon_longitude(jd)
        .map_err(|e| PanchangamError::at(jd, e))?;
    Ok(rasi_from_longitude(moon))
}

/// Sun's rasi position at a JD.
pub fn sun_rasi_at<P: EphemerisProvider>(
    eph: &P,
    jd: f64,
) -> Result<RasiPosition, PanchangamError> {
    let sun = eph
        .sun_longitude(jd)
        .map_err(|e| PanchangamError::at(jd, e))?;
    Ok(rasi_from_longitude(sun))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nila_ephem::AnalyticEphemeris;
    use nila_time::civil_to_jd;

    fn eph() -> AnalyticEphemeris {
        AnalyticEphemeris::new()
    }

    // Sunrise in Chennai on 2025-01-15 (≈ 01:02 UT)
    fn ref_jd() -> f64 {
        civil_to_jd(2025, 1, 15.043)
    }

    #[test]
    fn tithi_ends_after_ref() {
        let t = tithi_at(&eph(), ref_jd()).unwrap();
        assert!((1..=30).contains(&t.index));
        assert!(t.end_jd > ref_jd());
        assert!(t.end_jd < ref_jd() + 2.0);
    }

    #[test]
    fn tithi_end_sits_on_boundary() {
        let e = eph();
        let t = tithi_at(&e, ref_jd()).unwrap();
        let elong = elongation_at(&e, t.end_jd).unwrap();
        let boundary = normalize_360(t.index as f64 * TITHI_SPAN_DEG);
        let residual = nila_ephem::shortest_signed_arc(elong - boundary).abs();
        assert!(residual < 2.0 * CROSSING_TOL_DEG, "residual = {residual}");
    }

    #[test]
    fn nakshatra_end_sits_on_boundary() {
        let e = eph();
        let n = nakshatra_at(&e, ref_jd()).unwrap();
        assert!((1..=27).contains(&n.index));
        assert!((1..=4).contains(&n.pada));
        assert!(n.end_jd > ref_jd());
        let moon = e.moon_longitude(n.end_jd).unwrap();
        let boundary = normalize_360(n.index as f64 * NAKSHATRA_SPAN_DEG);
        let residual = nila_ephem::shortest_signed_arc(moon - boundary).abs();
        assert!(residual < 2.0 * CROSSING_TOL_DEG, "residual = {residual}");
    }

    #[test]
    fn yoga_within_window() {
        let y = yoga_at(&eph(), ref_jd()).unwrap();
        assert!((1..=27).contains(&y.index));
        assert!(y.end_jd > ref_jd() && y.end_jd < ref_jd() + 2.0);
    }

    #[test]
    fn karana_ends_within_a_day() {
        let k = karana_at(&eph(), ref_jd()).unwrap();
        assert!((1..=11).contains(&k.index));
        assert!(k.end_jd > ref_jd() && k.end_jd < ref_jd() + 1.0);
    }

    #[test]
    fn karana_half_of_tithi() {
        // The karana boundary always lands on or before the tithi boundary
        let e = eph();
        let t = tithi_at(&e, ref_jd()).unwrap();
        let k = karana_at(&e, ref_jd()).unwrap();
        assert!(k.end_jd <= t.end_jd + 1e-6);
    }

    #[test]
    fn next_names_advance() {
        let e = eph();
        let t = tithi_at(&e, ref_jd()).unwrap();
        assert_ne!(t.name.en, t.next_name.en);
        let n = nakshatra_at(&e, ref_jd()).unwrap();
        assert_ne!(n.name.en, n.next_name.en);
    }

    #[test]
    fn successive_days_advance_tithi() {
        let e = eph();
        let t0 = tithi_at(&e, ref_jd()).unwrap();
        let t1 = tithi_at(&e, ref_jd() + 1.0).unwrap();
        assert_ne!(t0.index, t1.index);
    }
}
