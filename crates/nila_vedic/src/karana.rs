//! Karana (half-tithi) classification.
//!
//! The 60 elongation half-slots of a lunation map onto 11 karana names:
//! slot 1 is the fixed Kimstughna, slots 58-60 are the fixed Shakuni,
//! Chatushpada and Naga, and slots 2-57 cycle through the seven movable
//! karanas (Bava .. Vishti) starting at Bava.

use serde::Serialize;

use crate::names::BilingualName;

/// Span of one karana slot in elongation degrees (half a tithi).
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// The 11 karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// Movable karanas cycle through slots 2-57; fixed karanas each own a
/// single slot per lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KaranaKind {
    Movable,
    Fixed,
}

/// The movable seven, in cycle order from slot 2.
const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Bilingual label.
    pub const fn name(self) -> BilingualName {
        match self {
            Self::Bava => BilingualName::new("Bava", "பவம்"),
            Self::Balava => BilingualName::new("Balava", "பாலவம்"),
            Self::Kaulava => BilingualName::new("Kaulava", "கௌலவம்"),
            Self::Taitila => BilingualName::new("Taitila", "தைதுலம்"),
            Self::Gara => BilingualName::new("Gara", "கரசை"),
            Self::Vanija => BilingualName::new("Vanija", "வணிசை"),
            Self::Vishti => BilingualName::new("Vishti", "விஷ்டி"),
            Self::Shakuni => BilingualName::new("Shakuni", "சகுனி"),
            Self::Chatushpada => BilingualName::new("Chatushpada", "சதுஷ்பாதம்"),
            Self::Naga => BilingualName::new("Naga", "நாகவம்"),
            Self::Kimstughna => BilingualName::new("Kimstughna", "கிமிஸ்துக்னம்"),
        }
    }

    /// 1-based index among the 11 variants (Bava = 1 .. Kimstughna = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Bava => 1,
            Self::Balava => 2,
            Self::Kaulava => 3,
            Self::Taitila => 4,
            Self::Gara => 5,
            Self::Vanija => 6,
            Self::Vishti => 7,
            Self::Shakuni => 8,
            Self::Chatushpada => 9,
            Self::Naga => 10,
            Self::Kimstughna => 11,
        }
    }

    /// Whether the karana is movable or fixed.
    pub const fn kind(self) -> KaranaKind {
        match self {
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna => KaranaKind::Fixed,
            _ => KaranaKind::Movable,
        }
    }
}

/// Result of karana classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    /// The karana.
    pub karana: Karana,
    /// 1-based slot within the lunation (1-60).
    pub slot: u8,
    /// Name of the karana.
    pub name: BilingualName,
    /// Movable or fixed.
    pub kind: KaranaKind,
}

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Elongation → 1-based karana slot (1-60).
pub fn karana_slot_from_elongation(elongation_deg: f64) -> u8 {
    let e = normalize_360(elongation_deg);
    ((e / KARANA_SPAN_DEG).floor() as u8 + 1).min(60)
}

/// Map a 1-based slot (1-60) to its karana.
pub fn karana_from_slot(slot: u8) -> KaranaPosition {
    debug_assert!((1..=60).contains(&slot));
    let karana = match slot {
        1 => Karana::Kimstughna,
        58 => Karana::Shakuni,
        59 => Karana::Chatushpada,
        60 => Karana::Naga,
        s => MOVABLE[((s - 2) % 7) as usize],
    };
    KaranaPosition {
        karana,
        slot,
        name: karana.name(),
        kind: karana.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_one_is_kimstughna() {
        let k = karana_from_slot(1);
        assert_eq!(k.karana, Karana::Kimstughna);
        assert_eq!(k.kind, KaranaKind::Fixed);
    }

    #[test]
    fn trailing_fixed_slots() {
        assert_eq!(karana_from_slot(58).karana, Karana::Shakuni);
        assert_eq!(karana_from_slot(59).karana, Karana::Chatushpada);
        assert_eq!(karana_from_slot(60).karana, Karana::Naga);
    }

    #[test]
    fn movable_cycle_starts_at_bava() {
        assert_eq!(karana_from_slot(2).karana, Karana::Bava);
        assert_eq!(karana_from_slot(8).karana, Karana::Vishti);
        // Period 7: slot 9 is Bava again
        assert_eq!(karana_from_slot(9).karana, Karana::Bava);
        assert_eq!(karana_from_slot(57).karana, Karana::Vishti);
    }

    #[test]
    fn full_table_kinds() {
        for slot in 1..=60u8 {
            let k = karana_from_slot(slot);
            let expect_fixed = matches!(slot, 1 | 58 | 59 | 60);
            assert_eq!(k.kind == KaranaKind::Fixed, expect_fixed, "slot {slot}");
        }
    }

    #[test]
    fn slot_from_elongation() {
        assert_eq!(karana_slot_from_elongation(0.0), 1);
        assert_eq!(karana_slot_from_elongation(5.99), 1);
        assert_eq!(karana_slot_from_elongation(6.0), 2);
        assert_eq!(karana_slot_from_elongation(359.9), 60);
    }

    #[test]
    fn eleven_distinct_karanas() {
        let mut seen = std::collections::HashSet::new();
        for slot in 1..=60u8 {
            seen.insert(karana_from_slot(slot).karana);
        }
        assert_eq!(seen.len(), 11);
    }
}
