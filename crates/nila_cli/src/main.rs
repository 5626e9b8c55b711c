use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use nila_ephem::AnalyticEphemeris;
use nila_panchangam::{DailyRequest, ReportOptions, TamilDayMode, daily};
use nila_vedic::FestivalCatalog;

#[derive(Parser)]
#[command(name = "nila", about = "Tamil panchangam engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full daily report as JSON
    Daily {
        /// Civil date, YYYY-MM-DD
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long, default_value_t = 13.0827)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, default_value_t = 80.2707)]
        lon: f64,
        /// IANA zone identifier
        #[arg(long, default_value = "Asia/Kolkata")]
        zone: String,
        /// Birth star for the Chandrashtama check
        #[arg(long)]
        birth_star: Option<String>,
        /// Use the degree-based Tamil day count instead of the civil
        /// sankranti rule
        #[arg(long)]
        degree_day: bool,
        /// Festival catalog JSON (replaces the built-in rules)
        #[arg(long)]
        festivals: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Sidereal Sun and Moon longitudes at a Julian Date
    Longitudes {
        /// Julian Date (UT)
        jd: f64,
    },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<FestivalCatalog, String> {
    match path {
        None => Ok(FestivalCatalog::builtin()),
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .map_err(|e| format!("cannot read {}: {e}", p.display()))?;
            FestivalCatalog::from_json_str(&text).map_err(|e| e.to_string())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    nila_ephem::configure_from_env();

    let cli = Cli::parse();
    let eph = AnalyticEphemeris::new();

    match cli.command {
        Commands::Daily {
            date,
            lat,
            lon,
            zone,
            birth_star,
            degree_day,
            festivals,
            pretty,
        } => {
            let catalog = match load_catalog(festivals.as_ref()) {
                Ok(c) => c,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    return ExitCode::FAILURE;
                }
            };
            let options = ReportOptions {
                tamil_day_mode: if degree_day {
                    TamilDayMode::SolarDegree
                } else {
                    TamilDayMode::CivilSankranti
                },
            };
            let request = DailyRequest {
                date,
                latitude: lat,
                longitude: lon,
                timezone: zone,
                birth_nakshatra: birth_star,
            };
            match daily(&eph, &catalog, &options, &request) {
                Ok(report) => {
                    let json = if pretty {
                        serde_json::to_string_pretty(&report)
                    } else {
                        serde_json::to_string(&report)
                    }
                    .expect("report serialization is infallible");
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Longitudes { jd } => {
            use nila_ephem::EphemerisProvider;
            match eph.sun_moon(jd) {
                Ok((sun, moon)) => {
                    println!("sun  {sun:.6}");
                    println!("moon {moon:.6}");
                    println!("ayanamsa {:.6}", eph.ayanamsa(jd));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
