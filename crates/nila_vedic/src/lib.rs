//! Pure panchangam classification: fixed tables and angle → limb mappers.
//!
//! This crate provides:
//! - Tithi (lunar day) from elongation, with paksha
//! - Nakshatra (lunar mansion) with pada and lord
//! - Yoga (luni-solar yoga) with its classical nature
//! - Karana (half-tithi) with the 60-slot → 11-name mapping
//! - Rasi (zodiac sign) with lord and DMS position
//! - Tamil solar calendar: months, degree-based day, 60-year cycle
//! - Weekday tables for Rahu Kalam, Yama Gandam, Kuligai and Gowri Neram
//! - Festival rule types and the built-in catalog
//!
//! Everything here is constant-table arithmetic; no ephemeris access.
//! All indices crossing the public API are 1-based, matching almanac
//! convention (tithi 1-30, nakshatra 1-27, rasi 1-12).

pub mod festival_rules;
pub mod gowri;
pub mod karana;
pub mod nakshatra;
pub mod names;
pub mod rasi;
pub mod tamil_calendar;
pub mod tithi;
pub mod yoga;

pub use festival_rules::{FestivalCatalog, FixedDateRule, NakshatraRule, RuleError, TithiRule};
pub use gowri::{
    GOWRI_NAME_CYCLE, GowriQuality, KULIGAI_EIGHTH, RAHU_EIGHTH, YAMA_EIGHTH, gowri_name_index,
    gowri_quality,
};
pub use karana::{KARANA_SPAN_DEG, Karana, KaranaKind, KaranaPosition, karana_from_slot, karana_slot_from_elongation};
pub use nakshatra::{
    NAKSHATRA_SPAN_DEG, NakshatraPosition, PADA_SPAN_DEG, nakshatra_from_longitude,
    nakshatra_index_by_name, nakshatra_name, nakshatra_start_degree,
};
pub use names::{BilingualName, Graha, vara_name};
pub use rasi::{Dms, RasiPosition, deg_to_dms, rasi_from_longitude, rasi_name};
pub use tamil_calendar::{
    TAMIL_YEAR_CYCLE, TamilMonth, TamilYear, tamil_day_degree_based, tamil_month_from_sun,
    tamil_month_name, tamil_year_from_gregorian,
};
pub use tithi::{Paksha, TITHI_SPAN_DEG, TithiPosition, tithi_from_elongation, tithi_name};
pub use yoga::{YOGA_SPAN_DEG, YogaNature, YogaPosition, yoga_from_sum, yoga_name};
