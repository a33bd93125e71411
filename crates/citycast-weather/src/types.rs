use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Temperature/measurement convention sent to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Value of the provider's `units` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Suffix appended to rounded temperatures
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }
}

/// Which weather product a render pass shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherMode {
    #[default]
    Current,
    Forecast,
}

impl WeatherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Forecast => "forecast",
        }
    }
}

/// Free-text place query: "city", "city,state" or "city,state,country"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing to geocode
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CityQuery {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Best geocoding match for a query, with the place fields the provider echoes back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub coordinate: Coordinate,
    pub name: String,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// One observation or forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    /// Provider icon code, e.g. "01d"
    pub condition_code: String,
    pub description: String,
}

/// 3-hourly forecast points, ascending by timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub samples: Vec<WeatherSample>,
    /// Offset of the forecast location; calendar days are computed in it
    pub utc_offset: FixedOffset,
}

impl ForecastSeries {
    pub fn new(samples: Vec<WeatherSample>, utc_offset: FixedOffset) -> Self {
        Self {
            samples,
            utc_offset,
        }
    }

    /// Series whose days are bucketed in UTC
    pub fn utc(samples: Vec<WeatherSample>) -> Self {
        Self::new(samples, Utc.fix())
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Calendar day of a timestamp in the series' reference offset
    pub fn calendar_day(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.utc_offset).date_naive()
    }

    /// Calendar day of the first sample, if any
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.samples.first().map(|s| self.calendar_day(s.timestamp))
    }

    /// Whether the series begins on `today`, the partial day the aggregator drops
    pub fn starts_on(&self, today: NaiveDate) -> bool {
        self.first_day() == Some(today)
    }
}

/// Highest-temperature sample of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRepresentative {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub condition_code: String,
    pub description: String,
}

impl DailyRepresentative {
    pub fn from_sample(date: NaiveDate, sample: &WeatherSample) -> Self {
        Self {
            date,
            timestamp: sample.timestamp,
            temperature: sample.temperature,
            condition_code: sample.condition_code.clone(),
            description: sample.description.clone(),
        }
    }

    /// English long weekday name, e.g. "Monday"
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

/// Errors from one city's pipeline
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    NotFound(String),
    #[error("{endpoint} API error: {status} {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
    },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// True for "no such place"; every other variant is a service failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "City not found. Check the spelling and try again.",
            Self::Api { status: 401, .. } => "Weather API key is invalid. Check settings.",
            Self::Api { status, .. } if *status >= 500 => {
                "Weather service unavailable. Please try again later."
            }
            Self::Api { .. } => "Weather service error. Please try again.",
            Self::Network(_) => "Unable to reach the weather service. Check your connection.",
            Self::Parse(_) => "Received an unexpected response from the weather service.",
        }
    }
}
