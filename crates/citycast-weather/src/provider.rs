//! Current conditions and 5 day / 3 hour forecast for a coordinate.

use tracing::instrument;

use crate::api::ApiClient;
use crate::types::{Coordinate, ForecastSeries, UnitSystem, WeatherError, WeatherSample};
use crate::wire::{ForecastBody, Observation};

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    api: ApiClient,
}

impl WeatherProvider {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Current conditions at `coord`
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(
        &self,
        coord: Coordinate,
        units: UnitSystem,
    ) -> Result<WeatherSample, WeatherError> {
        let obs: Observation = self
            .api
            .get_json("Weather", CURRENT_PATH, &Self::query(coord, units))
            .await?;

        WeatherSample::try_from(obs)
    }

    /// Raw 3-hourly forecast points at `coord`
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        coord: Coordinate,
        units: UnitSystem,
    ) -> Result<ForecastSeries, WeatherError> {
        let body: ForecastBody = self
            .api
            .get_json("Weather", FORECAST_PATH, &Self::query(coord, units))
            .await?;

        let series = ForecastSeries::try_from(body)?;
        tracing::debug!("Forecast has {} points", series.samples.len());
        Ok(series)
    }

    fn query(coord: Coordinate, units: UnitSystem) -> [(&'static str, String); 3] {
        [
            ("lat", coord.latitude.to_string()),
            ("lon", coord.longitude.to_string()),
            ("units", units.as_str().to_string()),
        ]
    }
}
