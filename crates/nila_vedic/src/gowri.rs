//! Weekday tables for the day-segment engines.
//!
//! The daylight interval divides into eight equal parts. Rahu Kalam,
//! Yama Gandam and Kuligai each occupy one eighth selected by weekday;
//! Gowri Neram tags all eight as good or bad and names each from a fixed
//! 8-entry cycle offset by the weekday. The offset rule
//! `(segment − 1 + weekday) mod 8` is preserved from the source catalog
//! as-is; its classical derivation is not documented anywhere.
//!
//! Weekday index is 0 = Sunday .. 6 = Saturday throughout.

use serde::Serialize;

use crate::names::BilingualName;

/// Rahu Kalam eighth (1-8) by weekday.
pub const RAHU_EIGHTH: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];

/// Yama Gandam eighth (1-8) by weekday.
pub const YAMA_EIGHTH: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Kuligai eighth (1-8) by weekday.
pub const KULIGAI_EIGHTH: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Quality tag of a Gowri segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GowriQuality {
    Good,
    Bad,
}

/// The 8-entry Gowri name cycle.
pub const GOWRI_NAME_CYCLE: [BilingualName; 8] = [
    BilingualName::new("Uthi", "உதி"),
    BilingualName::new("Amirdha", "அமிர்தம்"),
    BilingualName::new("Rogam", "ரோகம்"),
    BilingualName::new("Laabam", "லாபம்"),
    BilingualName::new("Dhanam", "தனம்"),
    BilingualName::new("Sugam", "சுகம்"),
    BilingualName::new("Soram", "சோரம்"),
    BilingualName::new("Visham", "விஷம்"),
];

/// Good Gowri segments for Sunday, Tuesday, Thursday and Saturday.
const GOOD_SET_A: [u8; 4] = [1, 2, 5, 6];

/// Good Gowri segments for Monday, Wednesday and Friday.
const GOOD_SET_B: [u8; 4] = [3, 4, 7, 8];

/// Quality of a 1-based daylight segment on a weekday.
pub fn gowri_quality(weekday: u8, segment: u8) -> GowriQuality {
    debug_assert!(weekday <= 6 && (1..=8).contains(&segment));
    let good = match weekday {
        0 | 2 | 4 | 6 => GOOD_SET_A,
        _ => GOOD_SET_B,
    };
    if good.contains(&segment) {
        GowriQuality::Good
    } else {
        GowriQuality::Bad
    }
}

/// 0-based index into [`GOWRI_NAME_CYCLE`] for a segment on a weekday.
pub fn gowri_name_index(weekday: u8, segment: u8) -> usize {
    debug_assert!(weekday <= 6 && (1..=8).contains(&segment));
    ((segment - 1 + weekday) % 8) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rahu_sunday_last_eighth() {
        assert_eq!(RAHU_EIGHTH[0], 8);
        // Monday morning Rahu (second eighth), the classic 9:00-10:30 slot
        assert_eq!(RAHU_EIGHTH[1], 2);
    }

    #[test]
    fn the_three_never_collide() {
        for wd in 0..7 {
            let (r, y, k) = (RAHU_EIGHTH[wd], YAMA_EIGHTH[wd], KULIGAI_EIGHTH[wd]);
            assert!(r != y && y != k && r != k, "weekday {wd}: {r} {y} {k}");
        }
    }

    #[test]
    fn four_good_four_bad_each_day() {
        for wd in 0..7u8 {
            let good = (1..=8u8)
                .filter(|&s| gowri_quality(wd, s) == GowriQuality::Good)
                .count();
            assert_eq!(good, 4, "weekday {wd}");
        }
    }

    #[test]
    fn sunday_good_set() {
        for s in [1, 2, 5, 6] {
            assert_eq!(gowri_quality(0, s), GowriQuality::Good);
        }
        for s in [3, 4, 7, 8] {
            assert_eq!(gowri_quality(0, s), GowriQuality::Bad);
        }
    }

    #[test]
    fn monday_good_set_inverted() {
        for s in [3, 4, 7, 8] {
            assert_eq!(gowri_quality(1, s), GowriQuality::Good);
        }
    }

    #[test]
    fn name_offset_rule() {
        // Sunday: segment 1 → Uthi; Wednesday (3): segment 1 → Laabam
        assert_eq!(gowri_name_index(0, 1), 0);
        assert_eq!(gowri_name_index(3, 1), 3);
        // Wraps past the end of the cycle
        assert_eq!(gowri_name_index(6, 8), (8 - 1 + 6) % 8);
    }

    #[test]
    fn name_indices_cover_cycle() {
        for wd in 0..7u8 {
            let mut seen = [false; 8];
            for s in 1..=8u8 {
                seen[gowri_name_index(wd, s)] = true;
            }
            assert!(seen.iter().all(|&x| x), "weekday {wd}");
        }
    }
}
