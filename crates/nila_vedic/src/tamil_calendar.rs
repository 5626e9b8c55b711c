//! Tamil solar calendar: months, degree-based day, and the 60-year cycle.
//!
//! A Tamil month is the Sun's residence in one sidereal sign: Chithirai
//! begins at sidereal 0° (Mesha sankranti). The 60-year name list is
//! anchored so Gregorian year 2000 maps to cycle index 23 (Vikrama); the
//! Tamil year number is the Kali year, `gregorian + 3101`.

use crate::names::BilingualName;

/// The 12 Tamil months, Chithirai through Panguni.
const TAMIL_MONTHS: [BilingualName; 12] = [
    BilingualName::new("Chithirai", "சித்திரை"),
    BilingualName::new("Vaigasi", "வைகாசி"),
    BilingualName::new("Aani", "ஆனி"),
    BilingualName::new("Aadi", "ஆடி"),
    BilingualName::new("Aavani", "ஆவணி"),
    BilingualName::new("Purattasi", "புரட்டாசி"),
    BilingualName::new("Aippasi", "ஐப்பசி"),
    BilingualName::new("Karthigai", "கார்த்திகை"),
    BilingualName::new("Margazhi", "மார்கழி"),
    BilingualName::new("Thai", "தை"),
    BilingualName::new("Maasi", "மாசி"),
    BilingualName::new("Panguni", "பங்குனி"),
];

/// The 60 Tamil year names. Index 0 holds Pingala; the rotation is fixed
/// by the 2000 → index 23 (Vikrama) anchor preserved from the source
/// catalog.
pub const TAMIL_YEAR_CYCLE: [BilingualName; 60] = [
    BilingualName::new("Pingala", "பிங்கள"),
    BilingualName::new("Kalayukthi", "காளயுக்தி"),
    BilingualName::new("Siddharthi", "சித்தார்த்தி"),
    BilingualName::new("Raudhri", "ரௌத்திரி"),
    BilingualName::new("Dhunmathi", "துன்மதி"),
    BilingualName::new("Dhundubhi", "துந்துபி"),
    BilingualName::new("Rudhrodhgaari", "ருத்ரோத்காரி"),
    BilingualName::new("Raktakshi", "ரக்தாட்சி"),
    BilingualName::new("Krodhana", "குரோதன"),
    BilingualName::new("Akshaya", "அட்சய"),
    BilingualName::new("Prabhava", "பிரபவ"),
    BilingualName::new("Vibhava", "விபவ"),
    BilingualName::new("Sukla", "சுக்ல"),
    BilingualName::new("Pramodoota", "பிரமோதூத"),
    BilingualName::new("Prachorpaththi", "பிரசோற்பத்தி"),
    BilingualName::new("Aangirasa", "ஆங்கிரச"),
    BilingualName::new("Srimukha", "ஸ்ரீமுக"),
    BilingualName::new("Bhava", "பவ"),
    BilingualName::new("Yuva", "யுவ"),
    BilingualName::new("Dhaathu", "தாது"),
    BilingualName::new("Eeswara", "ஈஸ்வர"),
    BilingualName::new("Vehudhanya", "வெகுதானிய"),
    BilingualName::new("Pramathi", "பிரமாதி"),
    BilingualName::new("Vikrama", "விக்கிரம"),
    BilingualName::new("Vishu", "விஷு"),
    BilingualName::new("Chitrabanu", "சித்திரபானு"),
    BilingualName::new("Subanu", "சுபானு"),
    BilingualName::new("Thaarana", "தாரண"),
    BilingualName::new("Parthiba", "பார்த்திப"),
    BilingualName::new("Viya", "விய"),
    BilingualName::new("Sarvajith", "சர்வஜித்"),
    BilingualName::new("Sarvadhari", "சர்வதாரி"),
    BilingualName::new("Virodhi", "விரோதி"),
    BilingualName::new("Vikruthi", "விக்ருதி"),
    BilingualName::new("Kara", "கர"),
    BilingualName::new("Nandhana", "நந்தன"),
    BilingualName::new("Vijaya", "விஜய"),
    BilingualName::new("Jaya", "ஜய"),
    BilingualName::new("Manmatha", "மன்மத"),
    BilingualName::new("Dhunmukhi", "துன்முகி"),
    BilingualName::new("Hevilambi", "ஹேவிளம்பி"),
    BilingualName::new("Vilambi", "விளம்பி"),
    BilingualName::new("Vikari", "விகாரி"),
    BilingualName::new("Sarvari", "சார்வரி"),
    BilingualName::new("Plava", "பிலவ"),
    BilingualName::new("Subakruthu", "சுபகிருது"),
    BilingualName::new("Sobakruthu", "சோபகிருது"),
    BilingualName::new("Krodhi", "குரோதி"),
    BilingualName::new("Visuvaasuva", "விசுவாசுவ"),
    BilingualName::new("Parabhava", "பராபவ"),
    BilingualName::new("Plavanga", "பிலவங்க"),
    BilingualName::new("Keelaka", "கீலக"),
    BilingualName::new("Saumya", "சௌமிய"),
    BilingualName::new("Sadharana", "சாதாரண"),
    BilingualName::new("Virodhikruthu", "விரோதிகிருது"),
    BilingualName::new("Paridhabi", "பரிதாபி"),
    BilingualName::new("Pramadhisa", "பிரமாதீச"),
    BilingualName::new("Aanandha", "ஆனந்த"),
    BilingualName::new("Rakshasa", "ராட்சச"),
    BilingualName::new("Nala", "நள"),
];

/// Cycle index of Gregorian year 2000 (Vikrama).
const ANCHOR_INDEX_2000: i32 = 23;

/// Offset of the Kali year count from the Gregorian year.
const KALI_YEAR_OFFSET: i32 = 3101;

/// A Tamil solar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TamilMonth {
    /// 1-based month index (1 = Chithirai .. 12 = Panguni).
    pub index: u8,
    /// Name of the month.
    pub name: BilingualName,
    /// Sidereal solar longitude at which the month begins: 30·(index−1).
    pub sun_start_degree: f64,
}

/// A Tamil year in the 60-year cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TamilYear {
    /// Name from the 60-year cycle.
    pub name: BilingualName,
    /// Kali year number (Gregorian year + 3101).
    pub number: i32,
}

/// Name of a 1-based Tamil month index.
pub fn tamil_month_name(index: u8) -> BilingualName {
    debug_assert!((1..=12).contains(&index));
    TAMIL_MONTHS[(index - 1) as usize]
}

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Tamil month from the Sun's sidereal longitude.
pub fn tamil_month_from_sun(sun_sidereal_deg: f64) -> TamilMonth {
    let lon = normalize_360(sun_sidereal_deg);
    let zero_based = ((lon / 30.0).floor() as u8).min(11);
    TamilMonth {
        index: zero_based + 1,
        name: TAMIL_MONTHS[zero_based as usize],
        sun_start_degree: zero_based as f64 * 30.0,
    }
}

/// Degree-based Tamil day-of-month: `floor(sun mod 30) + 1`.
///
/// An approximation of the civil sankranti count, off by one around month
/// boundaries; the civil rule lives with the limb engines since it needs
/// sunrise times.
pub fn tamil_day_degree_based(sun_sidereal_deg: f64) -> u8 {
    let lon = normalize_360(sun_sidereal_deg);
    (lon % 30.0).floor() as u8 + 1
}

/// Tamil year for a Gregorian year.
pub fn tamil_year_from_gregorian(gregorian_year: i32) -> TamilYear {
    let idx = (ANCHOR_INDEX_2000 + gregorian_year - 2000).rem_euclid(60) as usize;
    TamilYear {
        name: TAMIL_YEAR_CYCLE[idx],
        number: gregorian_year + KALI_YEAR_OFFSET,
    }
}
