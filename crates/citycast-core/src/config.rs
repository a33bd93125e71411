use anyhow::{Context, Result};
use citycast_weather::api::OPENWEATHER_API_BASE;
use citycast_weather::{UnitSystem, WeatherMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable that overrides `weather.api_key`
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors joined into one line
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `config.toml`
    #[serde(skip)]
    pub config_dir: PathBuf,

    /// Cities rendered when none are given on the command line
    #[serde(default)]
    pub cities: Vec<String>,

    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key. `OPENWEATHER_API_KEY` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default)]
    pub units: UnitSystem,

    #[serde(default)]
    pub mode: WeatherMode,

    /// Attach a precipitation map to every widget
    #[serde(default)]
    pub include_map: bool,
}

fn default_api_base_url() -> String {
    OPENWEATHER_API_BASE.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            units: UnitSystem::default(),
            mode: WeatherMode::default(),
            include_map: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            cities: Vec::new(),
            weather: WeatherConfig::default(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("citycast")
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default().with_env_overrides();
            Self::default().save_to(&config_path)?;
            tracing::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(config.with_env_overrides())
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; errors fail the load. `path` selects an explicit
    /// file instead of the default location.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    fn with_env_overrides(mut self) -> Self {
        self.override_api_key(std::env::var(API_KEY_ENV).ok());
        self
    }

    /// Replace the API key when `key` is present and non-blank
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.weather.api_key = Some(key);
        }
    }

    /// The configured API key, if it is non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.weather
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.weather.api_base_url,
            "weather.api_base_url",
            &mut result,
        );

        if self.api_key().is_none() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured; set it here or in {API_KEY_ENV}"),
            );
        }

        let blank = self.cities.iter().filter(|c| c.trim().is_empty()).count();
        if blank > 0 {
            result.add_warning("cities", format!("{blank} blank entries will be skipped"));
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Write the configuration as TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the default configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("citycast");

        Ok(config_dir.join("config.toml"))
    }
}

/// Parse a unit system name ("metric" or "imperial")
pub fn parse_units(value: &str) -> Result<UnitSystem, ConfigError> {
    match value {
        "metric" => Ok(UnitSystem::Metric),
        "imperial" => Ok(UnitSystem::Imperial),
        other => Err(ConfigError::Invalid(format!(
            "unknown unit system '{other}', expected metric or imperial"
        ))),
    }
}

/// Parse a display mode name ("current" or "forecast")
pub fn parse_mode(value: &str) -> Result<WeatherMode, ConfigError> {
    match value {
        "current" => Ok(WeatherMode::Current),
        "forecast" => Ok(WeatherMode::Forecast),
        other => Err(ConfigError::Invalid(format!(
            "unknown mode '{other}', expected current or forecast"
        ))),
    }
}
