//! Configuration constants and utilities for api-tester
//!
//! Locations of the credential file and the optional settings file, both
//! overridable through environment variables, plus the settings themselves.

use crate::error::{Error, Result};
use ini::Ini;
use std::path::{Path, PathBuf};

/// File name of the credential file, placed next to the executable
pub const TOKEN_FILE_NAME: &str = ".api_token";

/// Environment variable name for overriding the credential file path
pub const TOKEN_PATH_ENV_VAR: &str = "API_TESTER_TOKEN_PATH";

/// Default settings file path
pub const DEFAULT_CONFIG_PATH: &str = "~/.api-tester/config";

/// Environment variable name for overriding the settings file path
pub const CONFIG_PATH_ENV_VAR: &str = "API_TESTER_CONFIG";

/// Environment variable holding the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "API_TESTER_LOG_LEVEL";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SETTINGS_SECTION: &str = "default";

fn env_path(var: &str) -> Option<String> {
    std::env::var_os(var)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
}

/// Expand `~` and `$VAR` references in a configured path
pub fn expand_path(path: &str) -> Result<PathBuf> {
    shellexpand::full(path)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| Error::Config(format!("cannot expand '{path}': {e}")))
}

/// Get the credential file path, checking the environment variable first,
/// then falling back to a file next to the running executable
pub fn get_token_path() -> Result<PathBuf> {
    if let Some(path) = env_path(TOKEN_PATH_ENV_VAR) {
        return expand_path(&path);
    }

    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| {
            tracing::warn!("Cannot locate executable, storing token in working directory");
            PathBuf::from(".")
        });
    Ok(dir.join(TOKEN_FILE_NAME))
}

/// Get the settings file path, checking the environment variable first,
/// then falling back to default
pub fn get_config_path() -> String {
    env_path(CONFIG_PATH_ENV_VAR).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// User-tunable defaults for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timeout_secs: u64,
    pub show_headers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            show_headers: true,
        }
    }
}

impl Settings {
    /// Load settings from an INI file. A missing file yields the defaults.
    pub fn load(path: &str) -> Result<Self> {
        let path = expand_path(path)?;
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::debug!("Loading settings from {}", path.display());
        let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let ini = Ini::load_from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_ini(&ini)
    }

    /// Parse settings from INI text
    pub fn from_ini_str(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let mut settings = Self::default();
        let Some(section) = ini.section(Some(SETTINGS_SECTION)) else {
            return Ok(settings);
        };

        if let Some(value) = section.get("timeout") {
            settings.timeout_secs = match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(Error::Config(format!(
                        "timeout must be a positive number of seconds, got '{value}'"
                    )))
                }
            };
        }

        if let Some(value) = section.get("show_headers") {
            settings.show_headers = match value.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => {
                    return Err(Error::Config(format!(
                        "show_headers must be true or false, got '{value}'"
                    )))
                }
            };
        }

        Ok(settings)
    }
}
