//! Configuration loader
//!
//! Loads the beacon facade configuration from environment variables or
//! files.
//!
//! ## Loading Strategy
//! 1. If any `BEACONKIT_*` variable is set, build the config from the
//!    environment (unset variables keep their defaults)
//! 2. Otherwise, probe for a TOML config file
//! 3. Otherwise, fall back to `BeaconConfig::default()`
//!
//! ## Environment Variables
//! - `BEACONKIT_BACKGROUND_UPDATES`: allow background location updates
//!   (true/false)
//! - `BEACONKIT_DROP_EMPTY_RANGES`: suppress zero-beacon ranging updates
//!   (true/false)
//! - `BEACONKIT_EVENT_CHANNEL_CAPACITY`: native event channel bound
//!
//! ## File Locations
//! The loader probes `./beaconkit.toml`, `./config.toml`, and the same two
//! names in the parent directory, in that order.

use std::path::{Path, PathBuf};

use beaconkit_domain::{BeaconConfig, BeaconError, Result};

const ENV_BACKGROUND_UPDATES: &str = "BEACONKIT_BACKGROUND_UPDATES";
const ENV_DROP_EMPTY_RANGES: &str = "BEACONKIT_DROP_EMPTY_RANGES";
const ENV_CHANNEL_CAPACITY: &str = "BEACONKIT_EVENT_CHANNEL_CAPACITY";

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `BeaconError::Config` if an environment variable or config file
/// is present but malformed. Absence of both is not an error.
pub fn load() -> Result<BeaconConfig> {
    if env_present() {
        let config = load_from_env()?;
        tracing::info!("configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => {
            let config = load_from_file(Some(&path))?;
            tracing::info!(path = %path.display(), "configuration loaded from file");
            Ok(config)
        }
        None => {
            tracing::debug!("no configuration source found; using defaults");
            Ok(BeaconConfig::default())
        }
    }
}

fn env_present() -> bool {
    [ENV_BACKGROUND_UPDATES, ENV_DROP_EMPTY_RANGES, ENV_CHANNEL_CAPACITY]
        .iter()
        .any(|name| std::env::var_os(name).is_some())
}

/// Load configuration from environment variables, with defaults for unset
/// ones.
///
/// # Errors
/// Returns `BeaconError::Config` on unparseable values.
pub fn load_from_env() -> Result<BeaconConfig> {
    let mut config = BeaconConfig::default();

    if let Some(value) = env_bool(ENV_BACKGROUND_UPDATES)? {
        config.allows_background_location_updates = value;
    }
    if let Some(value) = env_bool(ENV_DROP_EMPTY_RANGES)? {
        config.drop_empty_ranges = value;
    }
    if let Ok(raw) = std::env::var(ENV_CHANNEL_CAPACITY) {
        config.event_channel_capacity = raw.parse::<usize>().map_err(|e| {
            BeaconError::Config(format!("invalid {ENV_CHANNEL_CAPACITY}: {e}"))
        })?;
    }

    Ok(config)
}

/// Load configuration from a TOML file.
///
/// If `path` is `None`, probes the default locations.
///
/// # Errors
/// Returns `BeaconError::Config` if the file is missing or malformed.
pub fn load_from_file(path: Option<&Path>) -> Result<BeaconConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths()
            .ok_or_else(|| BeaconError::Config("no config file found".into()))?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        BeaconError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    toml::from_str(&contents).map_err(|e| {
        BeaconError::Config(format!("failed to parse {}: {}", path.display(), e))
    })
}

fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 2] = ["beaconkit.toml", "config.toml"];
    for base in [".", ".."] {
        for name in NAMES {
            let candidate = Path::new(base).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            other => Err(BeaconError::Config(format!("invalid {name}: {other}"))),
        },
        Err(_) => Ok(None),
    }
}
