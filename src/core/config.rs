//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sports-events/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The resolved config is built once in `main` and passed down explicitly.
//! Nothing reads it through a global.
//!
//! Loading runs before the file logger exists (the log file and level are
//! config values), so nothing here logs directly. Messages are collected in
//! [`ConfigNotes`] and replayed once the logger is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::service::{CATALOG_PATH, DEFAULT_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub toast: ToastSettings,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub catalog_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ToastSettings {
    pub duration_ms: Option<u64>,
    pub position: Option<ToastPosition>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPosition {
    Top,
    #[default]
    Bottom,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "sports-events.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// How transient messages are shown. Passed to the TUI at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastConfig {
    pub duration: Duration,
    pub position: ToastPosition,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            position: ToastPosition::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub catalog_path: String,
    pub log_file: String,
    pub log_level: LevelFilter,
    pub toast: ToastConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Deferred Log Lines
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigNotes {
    entries: Vec<(Level, String)>,
}

impl ConfigNotes {
    pub fn record(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push((level, message.into()));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Emits every recorded line through `log`, oldest first.
    pub fn flush(self) {
        for (level, message) in self.entries {
            log::log!(level, "{message}");
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sports-events/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sports-events").join("config.toml"))
}

/// Load config from `~/.sports-events/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AppConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut ConfigNotes) -> Result<AppConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notes.record(
                Level::Warn,
                "Could not determine home directory, using default config",
            );
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        notes.record(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, notes);
        return Ok(AppConfig::default());
    }

    load_config_from(&path, notes)
}

pub fn load_config_from(
    path: &Path,
    notes: &mut ConfigNotes,
) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.record(Level::Info, format!("Loaded config from {}", path.display()));
    notes.record(Level::Debug, format!("Config: {config:?}"));
    Ok(config)
}

fn generate_default_config(path: &Path, notes: &mut ConfigNotes) {
    let default_content = r#"# Sports Events Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "sports-events.log"
# log_level = "debug"                 # "error", "warn", "info", "debug", "trace", "off"

# [api]
# base_url = "https://ios-kaizen.github.io/"   # Or set SPORTS_EVENTS_BASE_URL env var
# catalog_path = "MockSports/sports.json"

# [toast]
# duration_ms = 2500
# position = "bottom"                 # "top" or "bottom"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            notes.record(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.record(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values that come from outside the file. `None` = not specified.
#[derive(Debug, Default)]
pub struct Overrides {
    pub env_base_url: Option<String>,
    pub cli_base_url: Option<String>,
}

impl Overrides {
    /// Reads the environment and combines it with the CLI flag.
    pub fn from_env(cli_base_url: Option<String>) -> Self {
        Self {
            env_base_url: std::env::var("SPORTS_EVENTS_BASE_URL").ok(),
            cli_base_url,
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &AppConfig,
    overrides: &Overrides,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = overrides
        .cli_base_url
        .clone()
        .or_else(|| overrides.env_base_url.clone())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            notes.record(
                Level::Warn,
                format!("Unknown log_level {level:?}, using default"),
            );
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        base_url,
        catalog_path: config
            .api
            .catalog_path
            .clone()
            .unwrap_or_else(|| CATALOG_PATH.to_string()),
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        log_level,
        toast: ToastConfig {
            duration: Duration::from_millis(
                config.toast.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
            ),
            position: config.toast.position.unwrap_or_default(),
        },
    }
}
