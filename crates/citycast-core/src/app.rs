use std::sync::Arc;

use citycast_weather::{
    ApiClient, CityList, CityReport, RenderPipeline, RenderRequest, UnitSystem, WeatherMode,
};

use crate::{AppError, Config, ConfigError};

/// Command-line choices layered over the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct RenderOverrides {
    /// Replaces the configured city list when non-empty
    pub cities: Vec<String>,
    pub units: Option<UnitSystem>,
    pub mode: Option<WeatherMode>,
    /// Forces the map on; `false` keeps the configured value
    pub include_map: bool,
}

/// Application state: configuration plus a ready render pipeline
pub struct App {
    config: Arc<Config>,
    pipeline: RenderPipeline,
}

impl App {
    /// Build the application from a loaded configuration.
    ///
    /// Fails when no API key is available.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| ConfigError::MissingSetting("weather.api_key".to_string()))?;
        let api = ApiClient::with_base_url(api_key, &config.weather.api_base_url)?;

        tracing::debug!(base_url = api.base_url(), "Weather client ready");

        Ok(Self {
            config: Arc::new(config),
            pipeline: RenderPipeline::new(api),
        })
    }

    /// Merge the configuration with `overrides` into one render request
    pub fn request(&self, overrides: &RenderOverrides) -> RenderRequest {
        let cities: CityList = if overrides.cities.is_empty() {
            self.config.cities.iter().collect()
        } else {
            overrides.cities.iter().collect()
        };

        RenderRequest {
            cities,
            units: overrides.units.unwrap_or(self.config.weather.units),
            mode: overrides.mode.unwrap_or(self.config.weather.mode),
            include_map: overrides.include_map || self.config.weather.include_map,
        }
    }

    /// Run one render pass
    pub async fn render(&self, overrides: &RenderOverrides) -> Vec<CityReport> {
        let request = self.request(overrides);
        if request.cities.is_empty() {
            tracing::warn!("No cities to render");
        }
        self.pipeline.render(&request).await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
