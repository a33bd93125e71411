//! Error hierarchy for the CityCast binary.
//!
//! Per-city weather failures stay inside their `CityReport`; only failures
//! that stop the whole run (bad configuration, no API key, unusable client)
//! surface as `AppError`.

use citycast_weather::WeatherError;
use thiserror::Error;

/// Failure that ends a run. `user_message()` is what the terminal shows.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("weather service: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(WeatherError::Network(e)) => e.to_network_error().user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Transport-level failure talking to OpenWeatherMap
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("host unreachable: {0}")]
    Unreachable(String),

    #[error("timed out")]
    Timeout,

    #[error("HTTP {status}")]
    Rejected { status: u16 },

    #[error("undecodable body: {0}")]
    Undecodable(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::Unreachable(_) => {
                "Cannot reach OpenWeatherMap. Check your connection or weather.api_base_url."
            }
            NetworkError::Timeout => "OpenWeatherMap did not answer in time. Try again shortly.",
            NetworkError::Rejected { status } if *status >= 500 => {
                "OpenWeatherMap is having trouble. Try again later."
            }
            NetworkError::Rejected { .. } => "OpenWeatherMap rejected the request.",
            NetworkError::Undecodable(_) => "OpenWeatherMap sent a response CityCast cannot read.",
        }
    }
}

/// Problems with `config.toml`, the API key, or command-line values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file at {0}")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),

    #[error("malformed TOML: {0}")]
    ParseError(String),

    #[error("{0} is not set")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "The file given to --config does not exist.",
            ConfigError::Invalid(_) => "A setting has an unsupported value. See --help.",
            ConfigError::ParseError(_) => "config.toml is not valid TOML.",
            ConfigError::MissingSetting(_) => {
                "No API key. Set OPENWEATHER_API_KEY or weather.api_key in config.toml."
            }
        }
    }
}

/// Classify a reqwest failure into a [`NetworkError`]
pub trait ReqwestErrorExt {
    fn to_network_error(&self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn to_network_error(&self) -> NetworkError {
        if self.is_timeout() {
            return NetworkError::Timeout;
        }
        if self.is_decode() || self.is_body() {
            return NetworkError::Undecodable(self.to_string());
        }
        match self.status() {
            Some(status) => NetworkError::Rejected {
                status: status.as_u16(),
            },
            None => NetworkError::Unreachable(self.to_string()),
        }
    }
}
