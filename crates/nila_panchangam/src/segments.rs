//! Weekday-indexed partition of the daylight interval.
//!
//! Sunrise to sunset divides into eight equal parts. Rahu Kalam, Yama
//! Gandam and Kuligai each claim the single eighth their weekday table
//! names; Gowri Neram tags all eight good or bad, and Nalla Neram is the
//! good subset.

use nila_vedic::{
    GOWRI_NAME_CYCLE, GowriQuality, KULIGAI_EIGHTH, RAHU_EIGHTH, YAMA_EIGHTH, BilingualName,
    gowri_name_index, gowri_quality,
};

/// A half-open slice of the day, in JD UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_jd: f64,
    pub end_jd: f64,
}

/// One Gowri Neram segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GowriSegment {
    pub start_jd: f64,
    pub end_jd: f64,
    pub quality: GowriQuality,
    pub name: BilingualName,
}

/// All day segments for one civil day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySegments {
    pub rahu_kalam: Segment,
    pub yama_gandam: Segment,
    pub kuligai: Segment,
    /// All eight Gowri segments in daylight order.
    pub gowri: Vec<GowriSegment>,
    /// The good Gowri segments.
    pub nalla_neram: Vec<GowriSegment>,
}

/// The 1-based `n`th eighth of [sunrise, sunset].
fn eighth(sunrise_jd: f64, sunset_jd: f64, n: u8) -> Segment {
    let len = (sunset_jd - sunrise_jd) / 8.0;
    let start_jd = sunrise_jd + (n - 1) as f64 * len;
    Segment {
        start_jd,
        end_jd: start_jd + len,
    }
}

/// Partition the daylight interval for a weekday (0 = Sunday).
pub fn day_segments(sunrise_jd: f64, sunset_jd: f64, weekday: u8) -> DaySegments {
    debug_assert!(weekday <= 6);
    let wd = weekday as usize;

    let gowri: Vec<GowriSegment> = (1..=8u8)
        .map(|n| {
            let seg = eighth(sunrise_jd, sunset_jd, n);
            GowriSegment {
                start_jd: seg.start_jd,
                end_jd: seg.end_jd,
                quality: gowri_quality(weekday, n),
                name: GOWRI_NAME_CYCLE[gowri_name_index(weekday, n)],
            }
        })
        .collect();

    let nalla_neram = gowri
        .iter()
        .copied()
        .filter(|g| g.quality == GowriQuality::Good)
        .collect();

    DaySegments {
        rahu_kalam: eighth(sunrise_jd, sunset_jd, RAHU_EIGHTH[wd]),
        yama_gandam: eighth(sunrise_jd, sunset_jd, YAMA_EIGHTH[wd]),
        kuligai: eighth(sunrise_jd, sunset_jd, KULIGAI_EIGHTH[wd]),
        gowri,
        nalla_neram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RISE: f64 = 2_460_690.543; // ~06:32 local
    const SET: f64 = 2_460_691.021; // ~18:00 local

    #[test]
    fn gowri_tiles_daylight() {
        let segs = day_segments(RISE, SET, 3);
        assert_eq!(segs.gowri.len(), 8);
        assert!((segs.gowri[0].start_jd - RISE).abs() < 1e-12);
        assert!((segs.gowri[7].end_jd - SET).abs() < 1e-9);
        for pair in segs.gowri.windows(2) {
            assert!(
                (pair[0].end_jd - pair[1].start_jd).abs() < 1e-9,
                "gap between segments"
            );
        }
    }

    #[test]
    fn equal_lengths() {
        let segs = day_segments(RISE, SET, 0);
        let expected = (SET - RISE) / 8.0;
        for g in &segs.gowri {
            assert!((g.end_jd - g.start_jd - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn four_nalla_segments() {
        for wd in 0..7u8 {
            let segs = day_segments(RISE, SET, wd);
            assert_eq!(segs.nalla_neram.len(), 4, "weekday {wd}");
        }
    }

    #[test]
    fn monday_rahu_is_second_eighth() {
        let segs = day_segments(RISE, SET, 1);
        let second = eighth(RISE, SET, 2);
        assert_eq!(segs.rahu_kalam, second);
    }

    #[test]
    fn sunday_tables() {
        let segs = day_segments(RISE, SET, 0);
        assert_eq!(segs.rahu_kalam, eighth(RISE, SET, 8));
        assert_eq!(segs.yama_gandam, eighth(RISE, SET, 5));
        assert_eq!(segs.kuligai, eighth(RISE, SET, 7));
    }

    #[test]
    fn segments_within_daylight() {
        for wd in 0..7u8 {
            let segs = day_segments(RISE, SET, wd);
            for s in [segs.rahu_kalam, segs.yama_gandam, segs.kuligai] {
                assert!(s.start_jd >= RISE - 1e-9 && s.end_jd <= SET + 1e-9);
            }
        }
    }

    #[test]
    fn gowri_names_follow_offset() {
        // Wednesday (3): first segment carries cycle index 3 (Laabam)
        let segs = day_segments(RISE, SET, 3);
        assert_eq!(segs.gowri[0].name.en, "Laabam");
    }
}
