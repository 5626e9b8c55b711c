//! Nakshatra (lunar mansion) classification from the Moon's sidereal
//! longitude.
//!
//! The ecliptic divides into 27 equal arcs of 13°20′; each arc divides
//! into four padas of 3°20′. Lordship follows the Vimshottari cycle
//! (Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter, Saturn, Mercury) three
//! times around.

use crate::names::{BilingualName, Graha};

/// Span of one nakshatra: 360/27 = 13°20′.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: 3°20′.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras in Tamil almanac naming, Ashwini through Revathi.
const NAKSHATRA_NAMES: [BilingualName; 27] = [
    BilingualName::new("Ashwini", "அசுவினி"),
    BilingualName::new("Bharani", "பரணி"),
    BilingualName::new("Karthigai", "கார்த்திகை"),
    BilingualName::new("Rohini", "ரோகிணி"),
    BilingualName::new("Mrigasheersham", "மிருகசீரிஷம்"),
    BilingualName::new("Thiruvathirai", "திருவாதிரை"),
    BilingualName::new("Punarpoosam", "புனர்பூசம்"),
    BilingualName::new("Poosam", "பூசம்"),
    BilingualName::new("Ayilyam", "ஆயில்யம்"),
    BilingualName::new("Magam", "மகம்"),
    BilingualName::new("Pooram", "பூரம்"),
    BilingualName::new("Uthiram", "உத்திரம்"),
    BilingualName::new("Hastham", "அஸ்தம்"),
    BilingualName::new("Chithirai", "சித்திரை"),
    BilingualName::new("Swathi", "சுவாதி"),
    BilingualName::new("Visakam", "விசாகம்"),
    BilingualName::new("Anusham", "அனுஷம்"),
    BilingualName::new("Kettai", "கேட்டை"),
    BilingualName::new("Moolam", "மூலம்"),
    BilingualName::new("Pooradam", "பூராடம்"),
    BilingualName::new("Uthiradam", "உத்திராடம்"),
    BilingualName::new("Thiruvonam", "திருவோணம்"),
    BilingualName::new("Avittam", "அவிட்டம்"),
    BilingualName::new("Sathayam", "சதயம்"),
    BilingualName::new("Poorattathi", "பூரட்டாதி"),
    BilingualName::new("Uthirattathi", "உத்திரட்டாதி"),
    BilingualName::new("Revathi", "ரேவதி"),
];

/// Vimshottari lord cycle; repeats three times over the 27 nakshatras.
const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Sukran,
    Graha::Suriyan,
    Graha::Chandran,
    Graha::Sevvai,
    Graha::Rahu,
    Graha::Guru,
    Graha::Sani,
    Graha::Budhan,
];

/// Result of nakshatra classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    /// 1-based nakshatra index (1 = Ashwini .. 27 = Revathi).
    pub index: u8,
    /// Name of the nakshatra.
    pub name: BilingualName,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Ruling graha (Vimshottari lord).
    pub lord: Graha,
    /// Degrees already elapsed within this nakshatra.
    pub degrees_in_nakshatra: f64,
}

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Classify nakshatra and pada from the Moon's sidereal longitude.
pub fn nakshatra_from_longitude(moon_sidereal_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(moon_sidereal_deg);
    let zero_based = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26);
    let degrees_in = lon - zero_based as f64 * NAKSHATRA_SPAN_DEG;
    let pada = ((degrees_in / PADA_SPAN_DEG).floor() as u8).min(3) + 1;

    NakshatraPosition {
        index: zero_based + 1,
        name: NAKSHATRA_NAMES[zero_based as usize],
        pada,
        lord: LORD_CYCLE[(zero_based % 9) as usize],
        degrees_in_nakshatra: degrees_in,
    }
}

/// Sidereal longitude at which a 1-based nakshatra index begins.
pub fn nakshatra_start_degree(index: u8) -> f64 {
    debug_assert!((1..=27).contains(&index));
    (index - 1) as f64 * NAKSHATRA_SPAN_DEG
}

/// Name of a 1-based nakshatra index.
pub fn nakshatra_name(index: u8) -> BilingualName {
    debug_assert!((1..=27).contains(&index));
    NAKSHATRA_NAMES[(index - 1) as usize]
}

/// Resolve a nakshatra name (English, case-insensitive, or Tamil) to its
/// 1-based index. Used to accept the querant's birth star.
pub fn nakshatra_index_by_name(name: &str) -> Option<u8> {
    let trimmed = name.trim();
    NAKSHATRA_NAMES.iter().position(|n| {
        n.en.eq_ignore_ascii_case(trimmed) || n.ta == trimmed
    }).map(|i| i as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ashwini_at_zero() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.index, 1);
        assert_eq!(n.name.en, "Ashwini");
        assert_eq!(n.pada, 1);
        assert_eq!(n.lord, Graha::Ketu);
    }

    #[test]
    fn revathi_at_end() {
        let n = nakshatra_from_longitude(359.9);
        assert_eq!(n.index, 27);
        assert_eq!(n.name.en, "Revathi");
        assert_eq!(n.pada, 4);
        assert_eq!(n.lord, Graha::Budhan);
    }

    #[test]
    fn all_boundaries_start_pada_one() {
        for i in 1..=27u8 {
            let n = nakshatra_from_longitude(nakshatra_start_degree(i));
            assert_eq!(n.index, i);
            assert_eq!(n.pada, 1);
        }
    }

    #[test]
    fn pada_progression() {
        assert_eq!(nakshatra_from_longitude(0.1).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN_DEG + 0.1).pada, 2);
        assert_eq!(nakshatra_from_longitude(2.0 * PADA_SPAN_DEG + 0.1).pada, 3);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN_DEG + 0.1).pada, 4);
    }

    #[test]
    fn lord_cycle_repeats() {
        // Magam (10) restarts the cycle at Ketu; Moolam (19) again
        assert_eq!(nakshatra_from_longitude(nakshatra_start_degree(10)).lord, Graha::Ketu);
        assert_eq!(nakshatra_from_longitude(nakshatra_start_degree(19)).lord, Graha::Ketu);
        // Rohini (4) is the Moon's own star
        assert_eq!(nakshatra_from_longitude(nakshatra_start_degree(4)).lord, Graha::Chandran);
    }

    #[test]
    fn negative_longitude_wraps() {
        let n = nakshatra_from_longitude(-1.0);
        assert_eq!(n.index, 27);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(nakshatra_index_by_name("Rohini"), Some(4));
        assert_eq!(nakshatra_index_by_name("rohini"), Some(4));
        assert_eq!(nakshatra_index_by_name("  Thiruvonam "), Some(22));
        assert_eq!(nakshatra_index_by_name("ரோகிணி"), Some(4));
        assert_eq!(nakshatra_index_by_name("Polaris"), None);
    }

    #[test]
    fn start_degrees() {
        assert!((nakshatra_start_degree(1) - 0.0).abs() < 1e-12);
        assert!((nakshatra_start_degree(4) - 40.0).abs() < 1e-10);
        assert!((nakshatra_start_degree(27) - 346.666_666).abs() < 1e-3);
    }
}
