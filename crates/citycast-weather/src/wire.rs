//! OpenWeatherMap response bodies and their conversion to domain types.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::types::{Coordinate, ForecastSeries, Place, WeatherError, WeatherSample};

/// One entry of the direct geocoding array
#[derive(Debug, Deserialize)]
pub(crate) struct GeoMatch {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
    pub state: Option<String>,
}

impl From<GeoMatch> for Place {
    fn from(m: GeoMatch) -> Self {
        Place {
            coordinate: Coordinate::new(m.lat, m.lon),
            name: m.name,
            state: m.state,
            country: m.country,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainBlock {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// `/data/2.5/weather` body; also the shape of each forecast `list` entry
#[derive(Debug, Deserialize)]
pub(crate) struct Observation {
    pub dt: i64,
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl TryFrom<Observation> for WeatherSample {
    type Error = WeatherError;

    fn try_from(obs: Observation) -> Result<Self, Self::Error> {
        let timestamp = DateTime::<Utc>::from_timestamp(obs.dt, 0)
            .ok_or_else(|| WeatherError::Parse(format!("timestamp out of range: {}", obs.dt)))?;
        let (condition_code, description) = obs
            .weather
            .into_iter()
            .next()
            .map(|c| (c.icon, c.description))
            .unwrap_or_default();

        Ok(WeatherSample {
            timestamp,
            temperature: obs.main.temp,
            condition_code,
            description,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastCity {
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: i32,
}

/// `/data/2.5/forecast` body
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastBody {
    pub list: Vec<Observation>,
    pub city: Option<ForecastCity>,
}

impl TryFrom<ForecastBody> for ForecastSeries {
    type Error = WeatherError;

    fn try_from(body: ForecastBody) -> Result<Self, Self::Error> {
        let seconds = body.city.map_or(0, |c| c.timezone);
        let offset = FixedOffset::east_opt(seconds)
            .ok_or_else(|| WeatherError::Parse(format!("invalid UTC offset: {seconds}s")))?;

        let mut samples = body
            .list
            .into_iter()
            .map(WeatherSample::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // Provider already sends ascending points; keep the invariant explicit
        samples.sort_by_key(|s| s.timestamp);

        Ok(ForecastSeries::new(samples, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geo_match_into_place() {
        let m: Vec<GeoMatch> = serde_json::from_value(json!([{
            "name": "Portland",
            "local_names": {"en": "Portland"},
            "lat": 45.5152,
            "lon": -122.6784,
            "country": "US",
            "state": "Oregon"
        }]))
        .unwrap();

        let place = Place::from(m.into_iter().next().unwrap());
        assert_eq!(place.name, "Portland");
        assert_eq!(place.coordinate, Coordinate::new(45.5152, -122.6784));
        assert_eq!(place.state.as_deref(), Some("Oregon"));
    }

    #[test]
    fn test_observation_into_sample() {
        let obs: Observation = serde_json::from_value(json!({
            "dt": 1_717_250_400,
            "main": {"temp": 21.37, "humidity": 40},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "name": "Paris"
        }))
        .unwrap();

        let sample = WeatherSample::try_from(obs).unwrap();
        assert_eq!(sample.temperature, 21.37);
        assert_eq!(sample.condition_code, "01d");
        assert_eq!(sample.description, "clear sky");
        assert_eq!(sample.timestamp.timestamp(), 1_717_250_400);
    }

    #[test]
    fn test_observation_without_conditions() {
        let obs: Observation = serde_json::from_value(json!({
            "dt": 1_717_250_400,
            "main": {"temp": 3.0}
        }))
        .unwrap();

        let sample = WeatherSample::try_from(obs).unwrap();
        assert!(sample.condition_code.is_empty());
        assert!(sample.description.is_empty());
    }

    #[test]
    fn test_forecast_body_offset_and_order() {
        let body: ForecastBody = serde_json::from_value(json!({
            "cod": "200",
            "list": [
                {"dt": 1_717_261_200, "main": {"temp": 18.0}, "weather": [{"description": "few clouds", "icon": "02d"}]},
                {"dt": 1_717_250_400, "main": {"temp": 15.0}, "weather": [{"description": "clear sky", "icon": "01d"}]}
            ],
            "city": {"name": "Tokyo", "timezone": 32400}
        }))
        .unwrap();

        let series = ForecastSeries::try_from(body).unwrap();
        assert_eq!(series.utc_offset.local_minus_utc(), 32400);
        assert_eq!(series.samples[0].temperature, 15.0);
        assert_eq!(series.samples[1].temperature, 18.0);
    }

    #[test]
    fn test_forecast_body_without_city_is_utc() {
        let body: ForecastBody = serde_json::from_value(json!({"list": []})).unwrap();
        let series = ForecastSeries::try_from(body).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.utc_offset.local_minus_utc(), 0);
    }
}
