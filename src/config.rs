//! Configuration handling for the TUI

use crate::api::DEFAULT_ADDRESS;
use crate::state::DEFAULT_MILLIS_PER_CHAR;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the API address
const ADDRESS_ENV: &str = "GRIEVANCE_API_ADDRESS";

/// Default HTTP timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Grievance API base address
    pub api_base_url: Option<String>,
    /// Token refresh endpoint
    pub refresh_url: Option<String>,
    /// Session credentials file
    pub session_file: Option<PathBuf>,
    /// Alert display time per message character
    pub alert_millis_per_char: Option<u64>,
    /// HTTP request timeout
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "grievance", "grievance-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Base address: environment, then config file, then default
    pub fn api_base_url(&self) -> String {
        std::env::var(ADDRESS_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn refresh_url(&self) -> String {
        self.refresh_url.clone().unwrap_or_else(|| {
            format!("{}/auth/refresh", self.api_base_url().trim_end_matches('/'))
        })
    }

    pub fn alert_millis_per_char(&self) -> u64 {
        self.alert_millis_per_char.unwrap_or(DEFAULT_MILLIS_PER_CHAR)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
