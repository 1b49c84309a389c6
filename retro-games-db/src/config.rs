//! Store location and connection settings.
//!
//! Both front doors build a [`StoreConfig`] in `main` and pass it down; no
//! component looks up the store path on its own. The shared settings file is
//! `~/.config/retro-games/settings.toml`:
//!
//! ```toml
//! [store]
//! path = "/srv/games/retro_games.db"
//! busy_timeout_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a connection waits on a locked store before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(30);

const STORE_FILE_NAME: &str = "retro_games.db";

/// Where the catalog lives and how connections to it behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Resolve the store configuration using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `[store] path` in `settings.toml`
    /// 3. [`default_store_path`]
    ///
    /// `busy_timeout_ms` from `settings.toml` applies regardless of which path wins.
    pub fn resolve(cli_override: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_override, &settings_path())
    }

    /// [`StoreConfig::resolve`] against an explicit settings file.
    pub fn resolve_with(cli_override: Option<PathBuf>, settings_file: &Path) -> Self {
        let settings = std::fs::read_to_string(settings_file)
            .ok()
            .map(|contents| parse_settings(&contents))
            .unwrap_or_default();

        let path = cli_override
            .or(settings.path)
            .unwrap_or_else(default_store_path);
        let busy_timeout = settings
            .busy_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BUSY_TIMEOUT);

        log::debug!(
            "Store config: {} (busy timeout {:?})",
            path.display(),
            busy_timeout
        );
        Self { path, busy_timeout }
    }
}

/// Canonical path to the shared settings file: `~/.config/retro-games/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("retro-games").join("settings.toml")
}

/// Default store file shared by the CLI and the API server.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("retro-games").join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
}

#[derive(Debug, Default)]
struct StoreSettings {
    path: Option<PathBuf>,
    busy_timeout_ms: Option<u64>,
}

/// Read the `[store]` table. Unparseable files and wrong types are ignored.
fn parse_settings(contents: &str) -> StoreSettings {
    let Ok(doc) = contents.parse::<toml::Value>() else {
        log::warn!("Ignoring unparseable settings file");
        return StoreSettings::default();
    };
    let Some(store) = doc.get("store") else {
        return StoreSettings::default();
    };

    let path = store
        .get("path")
        .and_then(toml::Value::as_str)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    let busy_timeout_ms = store
        .get("busy_timeout_ms")
        .and_then(toml::Value::as_integer)
        .and_then(|ms| u64::try_from(ms).ok());

    StoreSettings {
        path,
        busy_timeout_ms,
    }
}
