// src/config.rs
//! Service configuration: `config/service.toml` with env overrides.
//!
//! ```toml
//! [service]
//! max_text_chars = 200000
//! debug_routes = false
//!
//! [logging]
//! dev_log = false
//! ```
//!
//! A missing file means defaults. Env vars win over the file.

use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/service.toml";
pub const DEFAULT_MAX_TEXT_CHARS: usize = 200_000;

pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_MAX_TEXT_CHARS: &str = "ANALYZER_MAX_TEXT_CHARS";
pub const ENV_DEV_LOG: &str = "ANALYZER_DEV_LOG";
pub const ENV_DEBUG_ROUTES: &str = "ANALYZER_DEBUG_ROUTES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Longest article text accepted by the API, in chars.
    pub max_text_chars: usize,
    /// Mount `/debug/*` routes.
    pub debug_routes: bool,
    /// Compact dev tracing output.
    pub dev_log: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            debug_routes: false,
            dev_log: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileRoot {
    #[serde(default)]
    service: ServiceSection,
    #[serde(default)]
    logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceSection {
    max_text_chars: Option<usize>,
    debug_routes: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingSection {
    dev_log: Option<bool>,
}

impl ServiceConfig {
    /// Load from `ANALYZER_CONFIG_PATH` (or the default path), then apply env overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut cfg = Self::load_file(Path::new(&path))?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Parse a TOML file; a missing file yields defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        let root: FileRoot = toml::from_str(raw)?;
        let d = Self::default();
        Ok(Self {
            max_text_chars: root.service.max_text_chars.unwrap_or(d.max_text_chars),
            debug_routes: root.service.debug_routes.unwrap_or(d.debug_routes),
            dev_log: root.logging.dev_log.unwrap_or(d.dev_log),
        })
    }

    fn apply_env(&mut self) {
        if let Some(n) = std::env::var(ENV_MAX_TEXT_CHARS)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
        {
            self.max_text_chars = n;
        }
        if let Some(on) = env_flag(ENV_DEV_LOG) {
            self.dev_log = on;
        }
        if let Some(on) = env_flag(ENV_DEBUG_ROUTES) {
            self.debug_routes = on;
        }
    }
}

/// `"1"`/`"true"` → Some(true), `"0"`/`"false"` → Some(false), otherwise None.
fn env_flag(name: &str) -> Option<bool> {
    match std::env::var(name).ok()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
