use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{model::city_name, provider::ProviderId};

pub const DEFAULT_HISTORY_WINDOW: usize = 7;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_provider = "mock"
/// default_location = "London"
/// simulate_latency = false
/// history_window = 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional default provider id; "mock" when absent.
    pub default_provider: Option<String>,

    /// Location shown when none is given on the command line.
    pub default_location: Option<String>,

    /// Delay provider responses the way a remote API would.
    pub simulate_latency: bool,

    /// Readings kept for trend analysis.
    pub history_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: None,
            default_location: None,
            simulate_latency: true,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderId.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        match self.default_provider.as_deref() {
            Some(s) => ProviderId::try_from(s).map_err(|e| {
                anyhow!("{e}\nHint: run `weather-insights configure` to pick a provider.")
            }),
            None => Ok(ProviderId::Mock),
        }
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    /// Stores the city part of `location`; blank locations mean "no default".
    pub fn set_default_location(&mut self, location: &str) {
        let city = city_name(location);
        self.default_location = (!city.is_empty()).then(|| city.to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if cfg.history_window == 0 {
            return Err(anyhow!(
                "Invalid config file {}: history_window must be at least 1",
                path.display()
            ));
        }

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-insights", "weather-insights")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
