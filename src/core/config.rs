//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pera/config.toml`. Every field is optional and a
//! missing file simply means "all defaults".

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PeraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaybackConfig {
    #[serde(rename = "loop")]
    pub looping: Option<bool>,
    pub gravity: Option<bool>,
    pub interval_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Auto mode never redraws faster than this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
pub const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FILE_NAME: &str = "pera.log";

/// Tried first when decoding input. Any WHATWG label is accepted.
#[cfg(windows)]
pub const DEFAULT_ENCODING: &str = "sjis";
#[cfg(not(windows))]
pub const DEFAULT_ENCODING: &str = "utf-8";

// ============================================================================
// Playback Mode
// ============================================================================

/// Chosen once at startup, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Key-driven.
    Manual,
    /// Timer-driven, one page per interval.
    Auto(Duration),
}

impl PlaybackMode {
    /// `0` selects manual mode; anything else is auto mode, floored to
    /// [`MIN_INTERVAL`].
    pub fn from_interval_ms(interval_ms: u64) -> Self {
        if interval_ms == 0 {
            PlaybackMode::Manual
        } else {
            PlaybackMode::Auto(Duration::from_millis(interval_ms).max(MIN_INTERVAL))
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub looping: bool,
    pub gravity: bool,
    pub mode: PlaybackMode,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub encoding: String,
}

/// Values given on the command line. `None` / `false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub looping: bool,
    pub gravity: bool,
    pub interval_ms: Option<u64>,
    pub encoding: Option<String>,
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
// Loading
// ============================================================================

/// Returns `~/.pera`, the home of the config file and the default log.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pera"))
}

/// Returns the path to `~/.pera/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.pera/config.toml`.
///
/// A missing file (or home directory) yields `PeraConfig::default()`.
/// A malformed file returns `ConfigError::Parse`.
pub fn load_config() -> Result<PeraConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(PeraConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PeraConfig, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(PeraConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PeraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PeraConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &PeraConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Boolean flags can only be switched on from the CLI
    let looping = cli.looping
        || env_flag(&env, "PERA_LOOP")
            .or(config.playback.looping)
            .unwrap_or(false);

    let gravity = cli.gravity
        || env_flag(&env, "PERA_GRAVITY")
            .or(config.playback.gravity)
            .unwrap_or(false);

    // Interval: CLI → env → config → manual
    let interval_ms = cli
        .interval_ms
        .or_else(|| env_number(&env, "PERA_INTERVAL"))
        .or(config.playback.interval_ms)
        .unwrap_or(0);

    // Log level: env → config → default
    let log_level = env("PERA_LOG")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Encoding: CLI → env → config → platform default
    let encoding = cli
        .encoding
        .clone()
        .or_else(|| env("PERA_ENCODING"))
        .or_else(|| config.general.encoding.clone())
        .unwrap_or_else(|| DEFAULT_ENCODING.to_string());

    // Log file: config (relative to ~/.pera/) → ~/.pera/pera.log
    let log_file = match &config.general.log_file {
        Some(file) => {
            let file = PathBuf::from(file);
            if file.is_absolute() {
                Some(file)
            } else {
                config_dir().map(|d| d.join(file))
            }
        }
        None => config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME)),
    };

    ResolvedConfig {
        looping,
        gravity,
        mode: PlaybackMode::from_interval_ms(interval_ms),
        log_level,
        log_file,
        encoding,
    }
}

fn env_flag(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let value = env(key)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        other => {
            warn!("Ignoring {key}={other:?}: expected a boolean");
            None
        }
    }
}

fn env_number(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let value = env(key)?;
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring {key}={value:?}: {e}");
            None
        }
    }
}
