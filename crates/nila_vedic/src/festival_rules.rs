//! Festival rule tables.
//!
//! Three rule shapes drive the matcher: tithi-based (Tamil month + tithi),
//! nakshatra-based (Tamil month + nakshatra) and fixed Gregorian dates.
//! A month of 0 means "any Tamil month". Tables arrive as static
//! configuration at process start, either the built-in catalog or JSON.

use serde::{Deserialize, Serialize};

use crate::tithi::Paksha;

/// A tithi-anchored festival.
///
/// The `paksha` field is redundant with the tithi index encoding (16-30 ⇒
/// krishna); matching ignores it, but consistency is enforced at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TithiRule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Tamil month 1-12, or 0 for any month.
    pub month: u8,
    /// Tithi index 1-30.
    pub tithi: u8,
    pub paksha: Paksha,
}

/// A nakshatra-anchored festival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraRule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Tamil month 1-12, or 0 for any month.
    pub month: u8,
    /// Nakshatra index 1-27.
    pub nakshatra: u8,
}

/// A fixed Gregorian-date festival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDateRule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Gregorian month 1-12.
    pub month: u8,
    /// Gregorian day 1-31.
    pub day: u8,
}

/// Errors raised while loading a rule catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleError {
    /// The JSON document could not be parsed.
    Malformed(String),
    /// A rule field is outside its legal range.
    OutOfRange { rule: String, field: &'static str },
    /// A tithi rule's paksha contradicts its tithi index.
    PakshaMismatch { rule: String },
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed festival catalog: {msg}"),
            Self::OutOfRange { rule, field } => {
                write!(f, "rule '{rule}': {field} out of range")
            }
            Self::PakshaMismatch { rule } => {
                write!(f, "rule '{rule}': paksha contradicts tithi index")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// The three rule tables, immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalCatalog {
    #[serde(default)]
    pub tithi_rules: Vec<TithiRule>,
    #[serde(default)]
    pub nakshatra_rules: Vec<NakshatraRule>,
    #[serde(default)]
    pub fixed_rules: Vec<FixedDateRule>,
}

impl FestivalCatalog {
    /// Parse a catalog from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| RuleError::Malformed(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check index ranges and tithi/paksha consistency.
    pub fn validate(&self) -> Result<(), RuleError> {
        for r in &self.tithi_rules {
            if r.month > 12 {
                return Err(RuleError::OutOfRange {
                    rule: r.name.clone(),
                    field: "month",
                });
            }
            if !(1..=30).contains(&r.tithi) {
                return Err(RuleError::OutOfRange {
                    rule: r.name.clone(),
                    field: "tithi",
                });
            }
            if Paksha::from_index(r.tithi) != r.paksha {
                return Err(RuleError::PakshaMismatch {
                    rule: r.name.clone(),
                });
            }
        }
        for r in &self.nakshatra_rules {
            if r.month > 12 {
                return Err(RuleError::OutOfRange {
                    rule: r.name.clone(),
                    field: "month",
                });
            }
            if !(1..=27).contains(&r.nakshatra) {
                return Err(RuleError::OutOfRange {
                    rule: r.name.clone(),
                    field: "nakshatra",
                });
            }
        }
        for r in &self.fixed_rules {
            if !(1..=12).contains(&r.month) {
                return Err(RuleError::OutOfRange {
                    rule: r.name.clone(),
                    field: "month",
                });
            }
            if !(1..=31).contains(&r.day) {
                return Err(RuleError::OutOfRange {
                    rule: r.name.clone(),
                    field: "day",
                });
            }
        }
        Ok(())
    }

    /// The catalog shipped with the engine: the major Tamil almanac days
    /// and the Indian government holidays.
    pub fn builtin() -> Self {
        fn tithi(name: &str, kind: &str, month: u8, tithi: u8) -> TithiRule {
            TithiRule {
                name: name.to_string(),
                kind: kind.to_string(),
                month,
                tithi,
                paksha: Paksha::from_index(tithi),
            }
        }
        fn nak(name: &str, kind: &str, month: u8, nakshatra: u8) -> NakshatraRule {
            NakshatraRule {
                name: name.to_string(),
                kind: kind.to_string(),
                month,
                nakshatra,
            }
        }
        fn fixed(name: &str, kind: &str, month: u8, day: u8) -> FixedDateRule {
            FixedDateRule {
                name: name.to_string(),
                kind: kind.to_string(),
                month,
                day,
            }
        }

        Self {
            tithi_rules: vec![
                // Deepavali day is Aippasi Krishna Chaturdasi (the oil-bath
                // morning), the Tamil convention
                tithi("Deepavali", "hindu", 7, 29),
                tithi("Vinayagar Chaturthi", "hindu", 5, 4),
                tithi("Krishna Jayanthi", "hindu", 5, 23),
                tithi("Vaikunda Ekadasi", "hindu", 9, 11),
                tithi("Maha Shivarathiri", "hindu", 11, 29),
                tithi("Pournami Viratham", "hindu", 0, 15),
                tithi("Amavasai", "hindu", 0, 30),
            ],
            nakshatra_rules: vec![
                nak("Thai Poosam", "hindu", 10, 8),
                nak("Aadi Pooram", "hindu", 4, 11),
                nak("Panguni Uthiram", "hindu", 12, 12),
                nak("Karthigai Deepam", "hindu", 8, 3),
                nak("Vaikasi Visakam", "hindu", 2, 16),
            ],
            fixed_rules: vec![
                fixed("New Year", "cultural", 1, 1),
                fixed("Pongal", "cultural", 1, 14),
                fixed("Republic Day", "government", 1, 26),
                fixed("May Day", "government", 5, 1),
                fixed("Independence Day", "government", 8, 15),
                fixed("Gandhi Jayanthi", "government", 10, 2),
                fixed("Christmas", "government", 12, 25),
            ],
        }
    }
}
