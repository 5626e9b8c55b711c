//! One-time process-wide ephemeris configuration.
//!
//! The data directory (for high-precision `sepl*.se1` / `semo*.se1` files)
//! and the sidereal mode are fixed once at startup and immutable after.
//! The engine must start, and remain fully functional, with no directory
//! configured: the built-in analytic theory covers the accuracy contract.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable naming the ephemeris data directory.
pub const EPHE_PATH_ENV: &str = "NILA_EPHE_PATH";

/// Process-wide ephemeris settings, set once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EphemerisSettings {
    /// Optional directory holding high-precision ephemeris files. Recorded
    /// for kernel-backed providers; the analytic theory ignores it.
    pub data_dir: Option<PathBuf>,
}

static SETTINGS: OnceLock<EphemerisSettings> = OnceLock::new();

/// Install settings. The first call wins; later calls (from any thread)
/// return the already-installed value, making startup idempotent.
pub fn configure(requested: EphemerisSettings) -> &'static EphemerisSettings {
    let installed = SETTINGS.get_or_init(|| requested.clone());
    if *installed != requested {
        log::warn!("ephemeris settings already configured; keeping the first configuration");
    }
    installed
}

/// Install settings from the environment (`NILA_EPHE_PATH`).
pub fn configure_from_env() -> &'static EphemerisSettings {
    let data_dir = std::env::var_os(EPHE_PATH_ENV).map(PathBuf::from);
    if let Some(dir) = &data_dir {
        log::debug!("ephemeris data directory: {}", dir.display());
    }
    configure(EphemerisSettings { data_dir })
}

/// Current settings; defaults (no data directory) if never configured.
pub fn settings() -> &'static EphemerisSettings {
    SETTINGS.get_or_init(EphemerisSettings::default)
}
