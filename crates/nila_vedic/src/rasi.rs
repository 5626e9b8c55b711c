//! Rasi (zodiac sign) classification and DMS rendering.
//!
//! Twelve signs of 30° each, Mesham at sidereal 0°. Lordship is the
//! classical scheme (Sevvai rules Mesham and Vrichigam, and so on).

use crate::names::{BilingualName, Graha};

/// The 12 rasis in Tamil naming, with their lords.
const RASI_TABLE: [(BilingualName, Graha); 12] = [
    (BilingualName::new("Mesham", "மேஷம்"), Graha::Sevvai),
    (BilingualName::new("Rishabam", "ரிஷபம்"), Graha::Sukran),
    (BilingualName::new("Mithunam", "மிதுனம்"), Graha::Budhan),
    (BilingualName::new("Katakam", "கடகம்"), Graha::Chandran),
    (BilingualName::new("Simmam", "சிம்மம்"), Graha::Suriyan),
    (BilingualName::new("Kanni", "கன்னி"), Graha::Budhan),
    (BilingualName::new("Thulam", "துலாம்"), Graha::Sukran),
    (BilingualName::new("Vrichigam", "விருச்சிகம்"), Graha::Sevvai),
    (BilingualName::new("Dhanusu", "தனுசு"), Graha::Guru),
    (BilingualName::new("Makaram", "மகரம்"), Graha::Sani),
    (BilingualName::new("Kumbam", "கும்பம்"), Graha::Sani),
    (BilingualName::new("Meenam", "மீனம்"), Graha::Guru),
];

/// Name of a 1-based rasi index.
pub fn rasi_name(index: u8) -> BilingualName {
    debug_assert!((1..=12).contains(&index));
    RASI_TABLE[(index - 1) as usize].0
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Convert decimal degrees to DMS (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Result of rasi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasiPosition {
    /// 1-based rasi index (1 = Mesham .. 12 = Meenam).
    pub index: u8,
    /// Name of the rasi.
    pub name: BilingualName,
    /// Ruling graha.
    pub lord: Graha,
    /// Sidereal longitude at which the rasi begins: 30·(index−1).
    pub start_degree: f64,
    /// Degrees within the rasi [0, 30).
    pub degrees_in_rasi: f64,
    /// Position within the rasi as DMS.
    pub dms: Dms,
}

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Classify the rasi from a sidereal ecliptic longitude.
pub fn rasi_from_longitude(sidereal_deg: f64) -> RasiPosition {
    let lon = normalize_360(sidereal_deg);
    let zero_based = ((lon / 30.0).floor() as u8).min(11);
    let start_degree = zero_based as f64 * 30.0;
    let degrees_in_rasi = lon - start_degree;
    let (name, lord) = RASI_TABLE[zero_based as usize];

    RasiPosition {
        index: zero_based + 1,
        name,
        lord,
        start_degree,
        degrees_in_rasi,
        dms: deg_to_dms(degrees_in_rasi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesham_at_zero() {
        let r = rasi_from_longitude(0.0);
        assert_eq!(r.index, 1);
        assert_eq!(r.name.en, "Mesham");
        assert_eq!(r.lord, Graha::Sevvai);
    }

    #[test]
    fn makaram_range() {
        let r = rasi_from_longitude(275.0);
        assert_eq!(r.index, 10);
        assert_eq!(r.name.en, "Makaram");
        assert_eq!(r.lord, Graha::Sani);
        assert!((r.start_degree - 270.0).abs() < 1e-12);
    }

    #[test]
    fn all_boundaries() {
        for i in 0..12u8 {
            let r = rasi_from_longitude(i as f64 * 30.0);
            assert_eq!(r.index, i + 1);
            assert!(r.degrees_in_rasi.abs() < 1e-10);
        }
    }

    #[test]
    fn wrap_and_negative() {
        assert_eq!(rasi_from_longitude(365.0).index, 1);
        assert_eq!(rasi_from_longitude(-10.0).index, 12);
    }

    #[test]
    fn dms_of_position() {
        // 45.5° → Rishabam 15°30′00″
        let r = rasi_from_longitude(45.5);
        assert_eq!(r.dms.degrees, 15);
        assert_eq!(r.dms.minutes, 30);
        assert!(r.dms.seconds.abs() < 0.01);
    }

    #[test]
    fn deg_to_dms_known() {
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn lords_pairing() {
        // Sevvai, Sukran, Budhan, Guru and Sani each rule two signs
        let mut counts = std::collections::HashMap::new();
        for i in 1..=12u8 {
            *counts
                .entry(rasi_from_longitude((i as f64 - 0.5) * 30.0).lord)
                .or_insert(0u8) += 1;
        }
        assert_eq!(counts[&Graha::Suriyan], 1);
        assert_eq!(counts[&Graha::Chandran], 1);
        assert_eq!(counts[&Graha::Sevvai], 2);
        assert_eq!(counts[&Graha::Sani], 2);
    }
}
