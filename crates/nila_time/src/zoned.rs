//! IANA-zone aware conversions between civil dates and Julian Dates.
//!
//! A request names its zone ("Asia/Kolkata"); every JD handed to the engine
//! is UT, and every rendered time is zone-local. The conversion path is
//! always JD → UTC civil → zone civil, never arithmetic on raw offsets.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::civil_to_jd;

/// Unix epoch (1970-01-01 00:00 UT) as a Julian Date.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Resolve an IANA zone identifier.
pub fn parse_zone(zone: &str) -> Result<Tz, TimeError> {
    zone.parse::<Tz>()
        .map_err(|_| TimeError::InvalidZone(zone.to_string()))
}

/// Parse `YYYY-MM-DD` into a calendar date.
fn parse_date(date: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))
}

/// JD UT of local midnight (00:00:00) of `date` in `zone`.
///
/// DST gaps are resolved to the earliest valid instant, matching what a
/// wall clock in that zone would first show on that date.
pub fn start_of_day(date: &str, zone: &str) -> Result<f64, TimeError> {
    let tz = parse_zone(zone)?;
    let naive = parse_date(date)?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeError::InvalidDate(date.to_string()))?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimeError::UnresolvableLocalTime(format!("{date} in {zone}")))?;
    let utc = local.with_timezone(&Utc);
    let day = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + utc.second() as f64 / 86_400.0;
    Ok(civil_to_jd(utc.year(), utc.month(), day))
}

/// Alias of [`start_of_day`]: a date string is interpreted as 00:00:00
/// local in the given zone.
pub fn date_to_jd(date: &str, zone: &str) -> Result<f64, TimeError> {
    start_of_day(date, zone)
}

/// Convert a JD UT to a zone-local civil datetime.
///
/// The JD is rounded to the nearest millisecond before conversion so that
/// boundary instants such as `…:59.9999` render as the intended minute.
pub fn jd_to_zoned(jd: f64, tz: Tz) -> DateTime<Tz> {
    let unix_ms = ((jd - UNIX_EPOCH_JD) * 86_400_000.0).round() as i64;
    let utc = DateTime::from_timestamp_millis(unix_ms).unwrap_or_default();
    utc.with_timezone(&tz)
}

/// Render a JD UT as zone-local `HH:MM:SS`, rounded to the nearest second.
pub fn format_hms(jd: f64, tz: Tz) -> String {
    let rounded = (jd * 86_400.0).round() / 86_400.0;
    jd_to_zoned(rounded, tz).format("%H:%M:%S").to_string()
}

/// Render a JD UT as zone-local `HH:MM`, rounded to the nearest minute.
pub fn format_hm(jd: f64, tz: Tz) -> String {
    let rounded = (jd * 1_440.0).round() / 1_440.0;
    jd_to_zoned(rounded, tz).format("%H:%M").to_string()
}

/// Weekday index of a civil date: 0 = Sunday … 6 = Saturday.
///
/// The zone argument only validates the request; a named civil date has
/// the same weekday in every zone.
pub fn weekday_index(date: &str, zone: &str) -> Result<u8, TimeError> {
    parse_zone(zone)?;
    let d = parse_date(date)?;
    Ok(d.weekday().num_days_from_sunday() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kolkata_midnight() {
        // 2025-01-15 00:00 IST = 2025-01-14 18:30 UT
        let jd = start_of_day("2025-01-15", "Asia/Kolkata").unwrap();
        let expected = civil_to_jd(2025, 1, 14.0 + 18.5 / 24.0);
        assert!((jd - expected).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn utc_midnight() {
        let jd = start_of_day("2025-06-21", "UTC").unwrap();
        assert!((jd - civil_to_jd(2025, 6, 21.0)).abs() < 1e-9);
    }

    #[test]
    fn unknown_zone_rejected() {
        let err = start_of_day("2025-01-15", "Asia/Nowhere").unwrap_err();
        assert!(matches!(err, TimeError::InvalidZone(_)));
    }

    #[test]
    fn malformed_date_rejected() {
        assert!(matches!(
            start_of_day("2025-13-40", "UTC").unwrap_err(),
            TimeError::InvalidDate(_)
        ));
        assert!(matches!(
            start_of_day("15/01/2025", "UTC").unwrap_err(),
            TimeError::InvalidDate(_)
        ));
    }

    #[test]
    fn zoned_roundtrip() {
        let tz: Tz = "Asia/Kolkata".parse().unwrap();
        let jd = start_of_day("2025-01-15", "Asia/Kolkata").unwrap();
        let local = jd_to_zoned(jd, tz);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.minute(), 0);
        assert_eq!(local.day(), 15);
    }

    #[test]
    fn hms_formatting() {
        let jd = start_of_day("2025-01-15", "UTC").unwrap();
        let tz: Tz = "UTC".parse().unwrap();
        assert_eq!(format_hms(jd + 0.25, tz), "06:00:00");
        assert_eq!(format_hm(jd + 0.25 + 29.0 / 86_400.0, tz), "06:00");
        assert_eq!(format_hm(jd + 0.25 + 31.0 / 86_400.0, tz), "06:01");
    }

    #[test]
    fn weekday_sunday_zero() {
        // 2025-01-12 was a Sunday
        assert_eq!(weekday_index("2025-01-12", "UTC").unwrap(), 0);
        assert_eq!(weekday_index("2025-01-15", "Asia/Kolkata").unwrap(), 3);
        assert_eq!(weekday_index("2025-01-18", "UTC").unwrap(), 6);
    }
}
