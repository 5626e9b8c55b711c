//! Tamil solar date: month, day-of-month and cyclic year.
//!
//! The month is the Sun's sidereal sign at sunrise. The day-of-month
//! follows the civil sankranti rule: if the Sun's ingress falls between
//! sunrise and sunset of a civil day, that day is day 1 of the new month;
//! an ingress after sunset makes the next civil day day 1. The degree
//! count `floor(sun mod 30) + 1` remains available as an approximation
//! mode.

use chrono::{Datelike, Days, NaiveDate};
use chrono_tz::Tz;

use nila_ephem::{CROSSING_TOL_DEG, DiurnalEvent, EphemerisProvider, GeoLocation, find_crossing};
use nila_time::{jd_to_zoned, start_of_day};
use nila_vedic::{TamilMonth, TamilYear, tamil_day_degree_based, tamil_month_from_sun, tamil_year_from_gregorian};

use crate::error::PanchangamError;

/// How the Tamil day-of-month is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TamilDayMode {
    /// Count civil days from the sankranti day (the source's civil rule).
    #[default]
    CivilSankranti,
    /// `floor(sun mod 30) + 1`, the degree-based approximation.
    SolarDegree,
}

/// The Tamil calendar position of a civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TamilDate {
    pub month: TamilMonth,
    /// 1-based day within the Tamil month.
    pub day: u8,
    pub year: TamilYear,
    /// JD UT of the Sun's ingress into the current month's sign.
    pub sankranti_jd: f64,
}

/// The sankranti can be at most one Tamil month (≤ 32 days) in the past.
const SANKRANTI_SEARCH_DAYS: f64 = 33.0;

/// Compute the Tamil date for the civil day whose sunrise is `sunrise_jd`.
pub fn tamil_date_at<P: EphemerisProvider>(
    eph: &P,
    sunrise_jd: f64,
    location: &GeoLocation,
    tz: Tz,
    mode: TamilDayMode,
) -> Result<TamilDate, PanchangamError> {
    let sun = eph
        .sun_longitude(sunrise_jd)
        .map_err(|e| PanchangamError::at(sunrise_jd, e))?;
    let month = tamil_month_from_sun(sun);

    // The ingress into this month's sign happened within the last month
    let f = |jd: f64| eph.sun_longitude(jd);
    let sankranti_jd = find_crossing(
        sunrise_jd - SANKRANTI_SEARCH_DAYS,
        sunrise_jd,
        month.sun_start_degree,
        f,
        CROSSING_TOL_DEG,
    )
    .map_err(|e| PanchangamError::at(sunrise_jd, e))?;

    let today = jd_to_zoned(sunrise_jd, tz).date_naive();
    let year = tamil_year_from_gregorian(today.year());

    let day = match mode {
        TamilDayMode::SolarDegree => tamil_day_degree_based(sun),
        TamilDayMode::CivilSankranti => {
            let day_one = sankranti_day_one(eph, sankranti_jd, location, tz)?;
            let elapsed = today.signed_duration_since(day_one).num_days();
            // An ingress in the pre-dawn hours leaves today nominally
            // before day 1; clamp so the first civil day of the sign
            // counts as 1.
            elapsed.clamp(0, 31) as u8 + 1
        }
    };

    Ok(TamilDate {
        month,
        day,
        year,
        sankranti_jd,
    })
}

/// Civil date that counts as day 1 for the month begun at `sankranti_jd`.
fn sankranti_day_one<P: EphemerisProvider>(
    eph: &P,
    sankranti_jd: f64,
    location: &GeoLocation,
    tz: Tz,
) -> Result<NaiveDate, PanchangamError> {
    let sankranti_date = jd_to_zoned(sankranti_jd, tz).date_naive();
    let day_start = start_of_day(&sankranti_date.format("%Y-%m-%d").to_string(), tz.name())?;

    let rise = eph
        .sunrise(day_start, location)
        .map_err(|e| PanchangamError::at(day_start, e))?;
    let set = eph
        .sunset(day_start, location)
        .map_err(|e| PanchangamError::at(day_start, e))?;

    let daytime = match (rise, set) {
        (DiurnalEvent::At(r), DiurnalEvent::At(s)) => {
            sankranti_jd >= r && sankranti_jd <= s
        }
        // Polar fallback: no usable horizon events, take the ingress day
        _ => true,
    };

    Ok(if daytime {
        sankranti_date
    } else {
        sankranti_date
            .checked_add_days(Days::new(1))
            .unwrap_or(sankranti_date)
    })
}
