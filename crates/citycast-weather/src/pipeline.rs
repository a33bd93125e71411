//! Per-city render pipeline: geocode, fetch, aggregate, build the display model.
//!
//! Every city runs independently. A failure is recorded for that city alone
//! and never stops the others.

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use serde::Serialize;
use tracing::instrument;

use crate::aggregate::aggregate;
use crate::api::ApiClient;
use crate::cities::CityList;
use crate::display::{map_surface_id, DisplayModel};
use crate::geocode::LocationResolver;
use crate::map::MapView;
use crate::provider::WeatherProvider;
use crate::types::{CityQuery, ForecastSeries, UnitSystem, WeatherError, WeatherMode};

/// Inputs of one render pass
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub cities: CityList,
    pub units: UnitSystem,
    pub mode: WeatherMode,
    pub include_map: bool,
}

/// Outcome of one city's pipeline
#[derive(Debug)]
pub struct CityReport {
    /// Zero-based position in the request's city list
    pub position: usize,
    pub query: CityQuery,
    pub outcome: Result<DisplayModel, WeatherError>,
}

impl CityReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Serializable view of a report, for JSON output
#[derive(Debug, Serialize)]
pub struct CityReportView<'a> {
    pub position: usize,
    pub query: &'a CityQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a DisplayModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a CityReport> for CityReportView<'a> {
    fn from(report: &'a CityReport) -> Self {
        let (model, error) = match &report.outcome {
            Ok(model) => (Some(model), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            position: report.position,
            query: &report.query,
            model,
            error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderPipeline {
    api: ApiClient,
    resolver: LocationResolver,
    provider: WeatherProvider,
}

impl RenderPipeline {
    pub fn new(api: ApiClient) -> Self {
        Self {
            resolver: LocationResolver::new(api.clone()),
            provider: WeatherProvider::new(api.clone()),
            api,
        }
    }

    /// Run every city of `request` concurrently.
    ///
    /// Reports come back in list order; the pipelines themselves share no
    /// state and may finish in any order.
    #[instrument(skip_all, fields(cities = request.cities.len(), mode = request.mode.as_str()), level = "info")]
    pub async fn render(&self, request: &RenderRequest) -> Vec<CityReport> {
        tracing::info!("Starting render pass");

        let pipelines = request
            .cities
            .iter()
            .enumerate()
            .map(|(position, query)| async move {
                let outcome = self.render_city(position, query, request).await;
                if let Err(e) = &outcome {
                    tracing::warn!(city = %query, error = %e, "City failed");
                }
                CityReport {
                    position,
                    query: query.clone(),
                    outcome,
                }
            });

        let reports = join_all(pipelines).await;

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        tracing::info!(
            "Render pass finished: {} ok, {} failed",
            reports.len() - failed,
            failed
        );
        reports
    }

    /// One city's pipeline. The weather fetch starts only after the location resolves.
    #[instrument(skip(self, query, request), fields(city = %query), level = "debug")]
    pub async fn render_city(
        &self,
        position: usize,
        query: &CityQuery,
        request: &RenderRequest,
    ) -> Result<DisplayModel, WeatherError> {
        let place = self.resolver.resolve(query).await?;
        let coord = place.coordinate;

        let mut model = DisplayModel::new(position, query.as_str(), request.units);

        match request.mode {
            WeatherMode::Current => {
                let sample = self.provider.fetch_current(coord, request.units).await?;
                model = model.with_current(sample);
            }
            WeatherMode::Forecast => {
                let series = self.provider.fetch_forecast(coord, request.units).await?;

                warn_if_stale(&series, today_in(series.utc_offset));

                let days = aggregate(&series);
                if let Some(first) = series.samples.first() {
                    model = model.with_current(first.clone());
                }
                model = model.with_forecast(&days);
            }
        }

        if request.include_map {
            model = model.with_map(MapView::new(
                coord,
                map_surface_id(position),
                self.api.api_key(),
            ));
        }

        Ok(model)
    }
}

/// Current date at a fixed offset
fn today_in(offset: chrono::FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// Warn when a non-empty series does not begin on `today`. Returns whether it warned.
///
/// The aggregator drops the first day regardless.
fn warn_if_stale(series: &ForecastSeries, today: NaiveDate) -> bool {
    if series.is_empty() || series.starts_on(today) {
        return false;
    }
    tracing::warn!(
        first_day = ?series.first_day(),
        %today,
        "Forecast does not start today; dropping its first day anyway"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    use crate::types::WeatherSample;

    fn series_from(start: chrono::DateTime<Utc>, offset_secs: i32) -> ForecastSeries {
        let samples = (0..8)
            .map(|i| WeatherSample {
                timestamp: start + chrono::Duration::hours(3 * i),
                temperature: 10.0,
                condition_code: "01d".to_string(),
                description: "clear sky".to_string(),
            })
            .collect();
        ForecastSeries::new(samples, FixedOffset::east_opt(offset_secs).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_starting_today_is_not_stale() {
        let series = series_from(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(), 0);
        assert!(!warn_if_stale(&series, date(2024, 6, 1)));
    }

    #[test]
    fn test_series_starting_yesterday_is_stale() {
        let series = series_from(Utc.with_ymd_and_hms(2024, 5, 31, 21, 0, 0).unwrap(), 0);
        assert!(warn_if_stale(&series, date(2024, 6, 1)));
    }

    #[test]
    fn test_staleness_uses_series_offset() {
        // 22:00 UTC on May 31 is already June 1 at UTC+3
        let series = series_from(Utc.with_ymd_and_hms(2024, 5, 31, 22, 0, 0).unwrap(), 3 * 3600);
        assert!(!warn_if_stale(&series, date(2024, 6, 1)));
    }

    #[test]
    fn test_empty_series_never_stale() {
        let series = ForecastSeries::utc(Vec::new());
        assert!(!warn_if_stale(&series, date(2024, 6, 1)));
    }
}
