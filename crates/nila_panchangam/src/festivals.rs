//! Festival matcher.
//!
//! Joins the day's Tamil month, tithi, nakshatra and Gregorian date
//! against the three rule tables. Output preserves first-occurrence order
//! (tithi rules, then nakshatra, then fixed) and deduplicates by English
//! name.

use serde::Serialize;

use nila_vedic::FestivalCatalog;

/// A matched festival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FestivalMatch {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The day's keys for rule matching.
#[derive(Debug, Clone, Copy)]
pub struct FestivalKeys {
    /// 1-based Tamil month of the day.
    pub tamil_month: u8,
    /// 1-based tithi at sunrise.
    pub tithi: u8,
    /// 1-based nakshatra at sunrise.
    pub nakshatra: u8,
    /// Gregorian month of the request date.
    pub gregorian_month: u8,
    /// Gregorian day of the request date.
    pub gregorian_day: u8,
}

fn month_matches(rule_month: u8, current: u8) -> bool {
    rule_month == 0 || rule_month == current
}

/// Match the catalog against the day's keys.
pub fn match_festivals(catalog: &FestivalCatalog, keys: &FestivalKeys) -> Vec<FestivalMatch> {
    let mut out: Vec<FestivalMatch> = Vec::new();

    let mut push = |name: &str, kind: &str| {
        if !out.iter().any(|f| f.name == name) {
            out.push(FestivalMatch {
                name: name.to_string(),
                kind: kind.to_string(),
            });
        }
    };

    for r in &catalog.tithi_rules {
        // Paksha is encoded by the tithi index; the rule's paksha field is
        // documentation only
        if month_matches(r.month, keys.tamil_month) && r.tithi == keys.tithi {
            push(&r.name, &r.kind);
        }
    }
    for r in &catalog.nakshatra_rules {
        if month_matches(r.month, keys.tamil_month) && r.nakshatra == keys.nakshatra {
            push(&r.name, &r.kind);
        }
    }
    for r in &catalog.fixed_rules {
        if r.month == keys.gregorian_month && r.day == keys.gregorian_day {
            push(&r.name, &r.kind);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tamil_month: u8, tithi: u8, nakshatra: u8, gm: u8, gd: u8) -> FestivalKeys {
        FestivalKeys {
            tamil_month,
            tithi,
            nakshatra,
            gregorian_month: gm,
            gregorian_day: gd,
        }
    }

    #[test]
    fn republic_day_fixed_match() {
        let out = match_festivals(&FestivalCatalog::builtin(), &keys(10, 5, 20, 1, 26));
        let rd = out.iter().find(|f| f.name == "Republic Day").unwrap();
        assert_eq!(rd.kind, "government");
    }

    #[test]
    fn deepavali_tithi_match() {
        // Aippasi (7), Krishna Chaturdasi (29)
        let out = match_festivals(&FestivalCatalog::builtin(), &keys(7, 29, 14, 10, 20));
        assert!(out.iter().any(|f| f.name == "Deepavali"));
    }

    #[test]
    fn vinayagar_chaturthi_match() {
        let out = match_festivals(&FestivalCatalog::builtin(), &keys(5, 4, 13, 8, 27));
        assert!(out.iter().any(|f| f.name == "Vinayagar Chaturthi"));
    }

    #[test]
    fn wildcard_month_matches_everywhere() {
        // Pournami Viratham has month 0
        for month in 1..=12u8 {
            let out = match_festivals(&FestivalCatalog::builtin(), &keys(month, 15, 1, 3, 3));
            assert!(out.iter().any(|f| f.name == "Pournami Viratham"));
        }
    }

    #[test]
    fn wrong_month_no_match() {
        // Deepavali tithi in the wrong Tamil month
        let out = match_festivals(&FestivalCatalog::builtin(), &keys(3, 29, 14, 6, 20));
        assert!(!out.iter().any(|f| f.name == "Deepavali"));
    }

    #[test]
    fn dedup_keeps_first_kind() {
        use nila_vedic::{FixedDateRule, NakshatraRule};
        let mut cat = FestivalCatalog::default();
        cat.nakshatra_rules.push(NakshatraRule {
            name: "Double".into(),
            kind: "hindu".into(),
            month: 0,
            nakshatra: 8,
        });
        cat.fixed_rules.push(FixedDateRule {
            name: "Double".into(),
            kind: "government".into(),
            month: 1,
            day: 14,
        });
        let out = match_festivals(&cat, &keys(10, 5, 8, 1, 14));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, "hindu");
    }

    #[test]
    fn ordering_tithi_before_fixed() {
        // 2025-01-14-like day: Pongal (fixed) and a wildcard tithi rule
        let out = match_festivals(&FestivalCatalog::builtin(), &keys(10, 15, 8, 1, 14));
        let pournami = out.iter().position(|f| f.name == "Pournami Viratham");
        let pongal = out.iter().position(|f| f.name == "Pongal");
        assert!(pournami.unwrap() < pongal.unwrap());
    }
}
