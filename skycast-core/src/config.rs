use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

/// Runtime settings. Every field has a default, so an empty or missing file is valid.
///
/// Example TOML:
/// ```toml
/// connect_timeout_secs = 3
/// language = "de"
/// intro_delay_ms = 0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the geocoding service, without the `/v1/search` path.
    pub geocoding_url: String,

    /// Base URL of the forecast service, without the `/v1/forecast` path.
    pub forecast_url: String,

    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,

    /// Maximum number of geocoding candidates requested.
    pub result_count: u8,

    /// Language used for place names in geocoding results.
    pub language: String,

    /// Pause after each startup banner line.
    pub intro_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            connect_timeout_secs: 5,
            read_timeout_secs: 5,
            result_count: 5,
            language: "en".to_string(),
            intro_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    /// Point both services at one host, as a mock server does.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.geocoding_url = base_url.to_string();
        self.forecast_url = base_url.to_string();
        self
    }
}
