//! Yoga classification from the combined Sun + Moon sidereal longitude.
//!
//! The sum (sun + moon) mod 360 divides into 27 yogas of 13°20′ each.
//! Nine of the 27 are classically inauspicious (Vishkambha, Atiganda,
//! Shoola, Ganda, Vyaghata, Vajra, Vyatipata, Parigha, Vaidhriti); the
//! rest are auspicious.

use serde::Serialize;

use crate::names::BilingualName;

/// Span of one yoga: 360/27 = 13°20′.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Classical quality of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YogaNature {
    Auspicious,
    Inauspicious,
}

const YOGA_NAMES: [BilingualName; 27] = [
    BilingualName::new("Vishkambha", "விஷ்கம்பம்"),
    BilingualName::new("Preethi", "ப்ரீதி"),
    BilingualName::new("Ayushman", "ஆயுஷ்மான்"),
    BilingualName::new("Saubhagya", "சௌபாக்கியம்"),
    BilingualName::new("Shobhana", "சோபனம்"),
    BilingualName::new("Atiganda", "அதிகண்டம்"),
    BilingualName::new("Sukarma", "சுகர்மா"),
    BilingualName::new("Dhriti", "திருதி"),
    BilingualName::new("Shoola", "சூலம்"),
    BilingualName::new("Ganda", "கண்டம்"),
    BilingualName::new("Vriddhi", "விருத்தி"),
    BilingualName::new("Dhruva", "துருவம்"),
    BilingualName::new("Vyaghata", "வியாகாதம்"),
    BilingualName::new("Harshana", "ஹர்ஷணம்"),
    BilingualName::new("Vajra", "வஜ்ரம்"),
    BilingualName::new("Siddhi", "சித்தி"),
    BilingualName::new("Vyatipata", "வியதீபாதம்"),
    BilingualName::new("Variyan", "வரீயான்"),
    BilingualName::new("Parigha", "பரிகம்"),
    BilingualName::new("Shiva", "சிவம்"),
    BilingualName::new("Siddha", "சித்தம்"),
    BilingualName::new("Sadhya", "சாத்தியம்"),
    BilingualName::new("Shubha", "சுபம்"),
    BilingualName::new("Shukla", "சுக்லம்"),
    BilingualName::new("Brahma", "பிரம்மம்"),
    BilingualName::new("Indra", "இந்திரம்"),
    BilingualName::new("Vaidhriti", "வைதிருதி"),
];

/// 1-based indices of the classically inauspicious yogas.
const INAUSPICIOUS: [u8; 9] = [1, 6, 9, 10, 13, 15, 17, 19, 27];

/// Name of a 1-based yoga index.
pub fn yoga_name(index: u8) -> BilingualName {
    debug_assert!((1..=27).contains(&index));
    YOGA_NAMES[(index - 1) as usize]
}

/// Result of yoga classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    /// 1-based yoga index (1 = Vishkambha .. 27 = Vaidhriti).
    pub index: u8,
    /// Name of the yoga.
    pub name: BilingualName,
    /// Classical quality.
    pub nature: YogaNature,
}

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Classify the yoga from (sun + moon) mod 360, sidereal degrees.
pub fn yoga_from_sum(combined_deg: f64) -> YogaPosition {
    let c = normalize_360(combined_deg);
    let index = ((c / YOGA_SPAN_DEG).floor() as u8 + 1).min(27);
    let nature = if INAUSPICIOUS.contains(&index) {
        YogaNature::Inauspicious
    } else {
        YogaNature::Auspicious
    };
    YogaPosition {
        index,
        name: yoga_name(index),
        nature,
    }
}
