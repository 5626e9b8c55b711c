//! The orchestrator: one call assembling the full daily report.
//!
//! `daily()` is the only place where errors become outcomes. It validates
//! the request whole, resolves sunrise/sunset (substituting sentinels and
//! setting `incomplete` when the latitude has no diurnal event), runs the
//! five limb engines on the sunrise instant, and renders every time in
//! the request zone: HH:MM:SS for limb ends and the horizon events,
//! HH:MM for day segments, Lagnam and Chandrashtama.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use nila_ephem::{DiurnalEvent, EphemerisProvider, GeoLocation};
use nila_time::{format_hm, format_hms, start_of_day, weekday_index};
use nila_vedic::{
    BilingualName, FestivalCatalog, GowriQuality, KaranaKind, Paksha, YogaNature, nakshatra_name,
    vara_name,
};

use crate::chandrashtama::{birth_nakshatra_index, chandrashtama_at};
use crate::error::PanchangamError;
use crate::festivals::{FestivalKeys, FestivalMatch, match_festivals};
use crate::lagnam::lagnam_intervals;
use crate::limbs::{karana_at, moon_rasi_at, nakshatra_at, sun_rasi_at, tithi_at, yoga_at};
use crate::segments::{DaySegments, day_segments};
use crate::tamil_date::{TamilDayMode, tamil_date_at};

/// One almanac request.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRequest {
    /// Civil date, `YYYY-MM-DD`.
    pub date: String,
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
    /// IANA zone identifier.
    pub timezone: String,
    /// Optional birth star for the Chandrashtama check.
    pub birth_nakshatra: Option<String>,
}

/// Engine options fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub tamil_day_mode: TamilDayMode,
}

/// A rendered HH:MM window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayOut {
    /// 0 = Sunday .. 6 = Saturday.
    pub index: u8,
    pub name: BilingualName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TamilYearOut {
    pub name: BilingualName,
    /// Kali year number.
    pub number: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TamilMonthOut {
    pub index: u8,
    pub name: BilingualName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiOut {
    pub index: u8,
    pub name: BilingualName,
    pub paksha: Paksha,
    /// Local HH:MM:SS at which the tithi ends.
    pub ends_at: String,
    pub next: BilingualName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraOut {
    pub index: u8,
    pub name: BilingualName,
    pub pada: u8,
    pub lord: BilingualName,
    pub ends_at: String,
    pub next: BilingualName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaOut {
    pub index: u8,
    pub name: BilingualName,
    pub nature: YogaNature,
    pub ends_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaranaOut {
    pub index: u8,
    pub name: BilingualName,
    pub kind: KaranaKind,
    pub ends_at: String,
    pub next: BilingualName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasiOut {
    pub index: u8,
    pub name: BilingualName,
    pub lord: BilingualName,
    /// Sidereal longitude of the body, degrees.
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LagnamOut {
    pub rasi_index: u8,
    pub name: BilingualName,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GowriOut {
    pub name: BilingualName,
    pub quality: GowriQuality,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChandrashtamaOut {
    pub birth_nakshatra: BilingualName,
    pub rasi: BilingualName,
    pub start: String,
    pub end: String,
}

/// The assembled daily almanac.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub date: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    /// True when sunrise/sunset are sentinels (polar latitudes).
    pub incomplete: bool,
    pub sunrise: String,
    pub sunset: String,
    pub weekday: WeekdayOut,
    pub tamil_year: TamilYearOut,
    pub tamil_month: TamilMonthOut,
    pub tamil_day: u8,
    pub tithi: TithiOut,
    pub nakshatra: NakshatraOut,
    pub yoga: YogaOut,
    pub karana: KaranaOut,
    pub sun_rasi: RasiOut,
    pub moon_rasi: RasiOut,
    pub lagnam: Vec<LagnamOut>,
    pub rahu_kalam: Window,
    pub yama_gandam: Window,
    pub kuligai: Window,
    pub gowri_neram: Vec<GowriOut>,
    pub nalla_neram: Vec<Window>,
    pub festivals: Vec<FestivalMatch>,
    pub chandrashtama: Option<ChandrashtamaOut>,
}

/// Sentinel spacing: one minute before next midnight.
const ONE_MINUTE: f64 = 1.0 / 1440.0;

fn validate(request: &DailyRequest) -> Result<NaiveDate, PanchangamError> {
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| PanchangamError::InvalidInput(format!("invalid date '{}'", request.date)))?;
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(PanchangamError::InvalidInput(format!(
            "latitude {} out of range",
            request.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&request.longitude) {
        return Err(PanchangamError::InvalidInput(format!(
            "longitude {} out of range",
            request.longitude
        )));
    }
    if let Some(star) = &request.birth_nakshatra {
        birth_nakshatra_index(star)?;
    }
    Ok(date)
}

/// Compute the full daily report.
pub fn daily<P: EphemerisProvider>(
    eph: &P,
    catalog: &FestivalCatalog,
    options: &ReportOptions,
    request: &DailyRequest,
) -> Result<DailyReport, PanchangamError> {
    let date = validate(request)?;
    let day_start = start_of_day(&request.date, &request.timezone)?;
    let tz: Tz = nila_time::parse_zone(&request.timezone)?;
    let location = GeoLocation::new(request.latitude, request.longitude);
    let weekday = weekday_index(&request.date, &request.timezone)?;

    // Horizon events, with sentinels for polar latitudes
    let rise = eph
        .sunrise(day_start, &location)
        .map_err(|e| PanchangamError::at(day_start, e))?;
    let set = eph
        .sunset(day_start, &location)
        .map_err(|e| PanchangamError::at(day_start, e))?;
    let (sunrise_jd, sunset_jd, incomplete) = match (rise, set) {
        (DiurnalEvent::At(r), DiurnalEvent::At(s)) => (r, s, false),
        (DiurnalEvent::At(r), _) => (r, day_start + 1.0 - ONE_MINUTE, true),
        (_, DiurnalEvent::At(s)) => (day_start, s, true),
        (DiurnalEvent::NeverRises, _) => (day_start + 0.5, day_start + 0.5, true),
        (DiurnalEvent::NeverSets, _) => (day_start, day_start + 1.0 - ONE_MINUTE, true),
    };
    if incomplete {
        log::warn!(
            "no diurnal event at latitude {} on {}; emitting sentinel times",
            request.latitude,
            request.date
        );
    }

    // Limbs at sunrise
    let tithi = tithi_at(eph, sunrise_jd)?;
    let nakshatra = nakshatra_at(eph, sunrise_jd)?;
    let yoga = yoga_at(eph, sunrise_jd)?;
    let karana = karana_at(eph, sunrise_jd)?;
    let sun_rasi = sun_rasi_at(eph, sunrise_jd)?;
    let moon_rasi = moon_rasi_at(eph, sunrise_jd)?;

    // Calendar, scan, segments, festivals
    let tamil = tamil_date_at(eph, sunrise_jd, &location, tz, options.tamil_day_mode)?;
    let lagnam = lagnam_intervals(eph, sunrise_jd, &location);
    let segments = day_segments(sunrise_jd, sunset_jd, weekday);
    let festivals = match_festivals(
        catalog,
        &FestivalKeys {
            tamil_month: tamil.month.index,
            tithi: tithi.index,
            nakshatra: nakshatra.index,
            gregorian_month: date.month() as u8,
            gregorian_day: date.day() as u8,
        },
    );

    let chandrashtama = match &request.birth_nakshatra {
        Some(star) => chandrashtama_at(eph, sunrise_jd, star)?.map(|rec| ChandrashtamaOut {
            birth_nakshatra: nakshatra_name(rec.birth_nakshatra_index),
            rasi: rec.rasi_name,
            start: format_hm(rec.start_jd, tz),
            end: format_hm(rec.end_jd, tz),
        }),
        None => None,
    };

    Ok(DailyReport {
        date: request.date.clone(),
        timezone: request.timezone.clone(),
        latitude: request.latitude,
        longitude: request.longitude,
        incomplete,
        sunrise: format_hms(sunrise_jd, tz),
        sunset: format_hms(sunset_jd, tz),
        weekday: WeekdayOut {
            index: weekday,
            name: vara_name(weekday),
        },
        tamil_year: TamilYearOut {
            name: tamil.year.name,
            number: tamil.year.number,
        },
        tamil_month: TamilMonthOut {
            index: tamil.month.index,
            name: tamil.month.name,
        },
        tamil_day: tamil.day,
        tithi: TithiOut {
            index: tithi.index,
            name: tithi.name,
            paksha: tithi.paksha,
            ends_at: format_hms(tithi.end_jd, tz),
            next: tithi.next_name,
        },
        nakshatra: NakshatraOut {
            index: nakshatra.index,
            name: nakshatra.name,
            pada: nakshatra.pada,
            lord: nakshatra.lord.name(),
            ends_at: format_hms(nakshatra.end_jd, tz),
            next: nakshatra.next_name,
        },
        yoga: YogaOut {
            index: yoga.index,
            name: yoga.name,
            nature: yoga.nature,
            ends_at: format_hms(yoga.end_jd, tz),
        },
        karana: KaranaOut {
            index: karana.index,
            name: karana.name,
            kind: karana.kind,
            ends_at: format_hms(karana.end_jd, tz),
            next: karana.next_name,
        },
        sun_rasi: RasiOut {
            index: sun_rasi.index,
            name: sun_rasi.name,
            lord: sun_rasi.lord.name(),
            longitude: sun_rasi.start_degree + sun_rasi.degrees_in_rasi,
        },
        moon_rasi: RasiOut {
            index: moon_rasi.index,
            name: moon_rasi.name,
            lord: moon_rasi.lord.name(),
            longitude: moon_rasi.start_degree + moon_rasi.degrees_in_rasi,
        },
        lagnam: lagnam
            .iter()
            .map(|iv| LagnamOut {
                rasi_index: iv.rasi_index,
                name: iv.name,
                start: format_hm(iv.start_jd, tz),
                end: format_hm(iv.end_jd, tz),
            })
            .collect(),
        rahu_kalam: render_window(&segments, tz, SegmentPick::Rahu),
        yama_gandam: render_window(&segments, tz, SegmentPick::Yama),
        kuligai: render_window(&segments, tz, SegmentPick::Kuligai),
        gowri_neram: segments
            .gowri
            .iter()
            .map(|g| GowriOut {
                name: g.name,
                quality: g.quality,
                start: format_hm(g.start_jd, tz),
                end: format_hm(g.end_jd, tz),
            })
            .collect(),
        nalla_neram: segments
            .nalla_neram
            .iter()
            .map(|g| Window {
                start: format_hm(g.start_jd, tz),
                end: format_hm(g.end_jd, tz),
            })
            .collect(),
        festivals,
        chandrashtama,
    })
}

enum SegmentPick {
    Rahu,
    Yama,
    Kuligai,
}

fn render_window(segments: &DaySegments, tz: Tz, pick: SegmentPick) -> Window {
    let seg = match pick {
        SegmentPick::Rahu => segments.rahu_kalam,
        SegmentPick::Yama => segments.yama_gandam,
        SegmentPick::Kuligai => segments.kuligai,
    };
    Window {
        start: format_hm(seg.start_jd, tz),
        end: format_hm(seg.end_jd, tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nila_ephem::AnalyticEphemeris;

    fn chennai_request(date: &str) -> DailyRequest {
        DailyRequest {
            date: date.to_string(),
            latitude: 13.0827,
            longitude: 80.2707,
            timezone: "Asia/Kolkata".to_string(),
            birth_nakshatra: None,
        }
    }

    fn run(request: &DailyRequest) -> Result<DailyReport, PanchangamError> {
        daily(
            &AnalyticEphemeris::new(),
            &FestivalCatalog::builtin(),
            &ReportOptions::default(),
            request,
        )
    }

    #[test]
    fn bad_date_rejected() {
        let mut req = chennai_request("2025-02-30");
        assert!(matches!(
            run(&req).unwrap_err(),
            PanchangamError::InvalidInput(_)
        ));
        req = chennai_request("not-a-date");
        assert!(run(&req).is_err());
    }

    #[test]
    fn bad_latitude_rejected() {
        let mut req = chennai_request("2025-01-15");
        req.latitude = 91.0;
        assert!(matches!(
            run(&req).unwrap_err(),
            PanchangamError::InvalidInput(_)
        ));
    }

    #[test]
    fn bad_zone_rejected() {
        let mut req = chennai_request("2025-01-15");
        req.timezone = "Mars/Olympus".to_string();
        assert!(matches!(
            run(&req).unwrap_err(),
            PanchangamError::InvalidInput(_)
        ));
    }

    #[test]
    fn unknown_birth_star_rejected() {
        let mut req = chennai_request("2025-01-15");
        req.birth_nakshatra = Some("Vega".to_string());
        assert!(matches!(
            run(&req).unwrap_err(),
            PanchangamError::InvalidInput(_)
        ));
    }

    #[test]
    fn complete_report_for_chennai() {
        let report = run(&chennai_request("2025-01-15")).unwrap();
        assert!(!report.incomplete);
        assert_eq!(report.weekday.index, 3); // Wednesday
        assert_eq!(report.gowri_neram.len(), 8);
        assert_eq!(report.nalla_neram.len(), 4);
        assert!(!report.lagnam.is_empty());
        assert!(report.chandrashtama.is_none());
    }
}
