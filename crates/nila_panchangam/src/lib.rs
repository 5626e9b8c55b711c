//! Daily panchangam assembly.
//!
//! This crate provides:
//! - Limb engines: tithi, nakshatra, yoga and karana active at sunrise
//!   with their end instants, via the crossing solver
//! - Tamil solar date (civil sankranti rule, degree-based mode)
//! - Chandrashtama evaluation for a birth star
//! - Rahu Kalam / Yama Gandam / Kuligai / Gowri day segments
//! - The Lagnam scanner over the 24-hour cycle
//! - Festival matching against the rule catalog
//! - The [`daily`] orchestrator producing a rendered [`DailyReport`]
//!
//! The engine is purely functional per request: no shared mutable state,
//! every record a value. Concurrent reports only require the ephemeris
//! provider to be shareable, which the trait bounds enforce.

pub mod chandrashtama;
pub mod daily;
pub mod error;
pub mod festivals;
pub mod lagnam;
pub mod limbs;
pub mod segments;
pub mod tamil_date;

pub use chandrashtama::{ChandrashtamaRecord, chandrashtama_at, chandrashtama_rasi};
pub use daily::{DailyReport, DailyRequest, ReportOptions, daily};
pub use error::PanchangamError;
pub use festivals::{FestivalKeys, FestivalMatch, match_festivals};
pub use lagnam::{LagnamInterval, lagnam_intervals};
pub use limbs::{
    KaranaRecord, NakshatraRecord, TithiRecord, YogaRecord, elongation_at, karana_at,
    moon_rasi_at, nakshatra_at, sun_rasi_at, tithi_at, yoga_at,
};
pub use segments::{DaySegments, GowriSegment, Segment, day_segments};
pub use tamil_date::{TamilDate, TamilDayMode, tamil_date_at};
