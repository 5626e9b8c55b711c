//! Tithi (lunar day) classification from Moon-Sun elongation.
//!
//! A lunation divides into 30 tithis of 12° of elongation each. Tithis
//! 1-15 form the shukla (waxing) paksha and 16-30 the krishna (waning)
//! paksha; the 15th is Pournami (full moon) and the 30th Amavasai (new
//! moon).

use serde::{Deserialize, Serialize};

use crate::names::BilingualName;

/// Span of one tithi in elongation degrees.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Waxing fortnight, tithis 1-15.
    Shukla,
    /// Waning fortnight, tithis 16-30.
    Krishna,
}

impl Paksha {
    /// Paksha of a 1-based tithi index.
    pub const fn from_index(index: u8) -> Self {
        if index <= 15 { Self::Shukla } else { Self::Krishna }
    }

    /// Bilingual label.
    pub const fn name(self) -> BilingualName {
        match self {
            Self::Shukla => BilingualName::new("Shukla", "வளர்பிறை"),
            Self::Krishna => BilingualName::new("Krishna", "தேய்பிறை"),
        }
    }
}

/// Tithi names within a paksha; the 15th slot differs between pakshas
/// (Pournami vs Amavasai).
const TITHI_NAMES_IN_PAKSHA: [BilingualName; 14] = [
    BilingualName::new("Prathamai", "பிரதமை"),
    BilingualName::new("Dvithiyai", "துவிதியை"),
    BilingualName::new("Thrithiyai", "திருதியை"),
    BilingualName::new("Chaturthi", "சதுர்த்தி"),
    BilingualName::new("Panchami", "பஞ்சமி"),
    BilingualName::new("Sashti", "சஷ்டி"),
    BilingualName::new("Sapthami", "சப்தமி"),
    BilingualName::new("Ashtami", "அஷ்டமி"),
    BilingualName::new("Navami", "நவமி"),
    BilingualName::new("Dasami", "தசமி"),
    BilingualName::new("Ekadasi", "ஏகாதசி"),
    BilingualName::new("Dvadasi", "துவாதசி"),
    BilingualName::new("Thrayodasi", "திரயோதசி"),
    BilingualName::new("Chaturdasi", "சதுர்த்தசி"),
];

const POURNAMI: BilingualName = BilingualName::new("Pournami", "பௌர்ணமி");
const AMAVASAI: BilingualName = BilingualName::new("Amavasai", "அமாவாசை");

/// Name of a 1-based tithi index (1-30).
pub fn tithi_name(index: u8) -> BilingualName {
    debug_assert!((1..=30).contains(&index));
    match index {
        15 => POURNAMI,
        30 => AMAVASAI,
        i if i < 15 => TITHI_NAMES_IN_PAKSHA[(i - 1) as usize],
        i => TITHI_NAMES_IN_PAKSHA[(i - 16) as usize],
    }
}

/// Result of tithi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// 1-based tithi index (1-30).
    pub index: u8,
    /// Name of the tithi.
    pub name: BilingualName,
    /// Fortnight: shukla iff index ≤ 15.
    pub paksha: Paksha,
    /// Degrees of elongation already elapsed within this tithi.
    pub degrees_in_tithi: f64,
}

/// Normalize an angle to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Classify the tithi from the Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let index = ((e / TITHI_SPAN_DEG).floor() as u8 + 1).min(30);
    TithiPosition {
        index,
        name: tithi_name(index),
        paksha: Paksha::from_index(index),
        degrees_in_tithi: e - (index - 1) as f64 * TITHI_SPAN_DEG,
    }
}
