//! Weather widgets for CityCast
//!
//! Resolves city queries with OpenWeatherMap geocoding, fetches current
//! conditions or the 5 day forecast, and builds one display model per city.

pub mod aggregate;
pub mod api;
pub mod cities;
pub mod classify;
pub mod display;
pub mod geocode;
pub mod icons;
pub mod map;
pub mod pipeline;
pub mod provider;
pub mod types;
mod wire;

pub use aggregate::{aggregate, FORECAST_DAYS};
pub use api::ApiClient;
pub use cities::CityList;
pub use classify::{classify, ColorCategory};
pub use display::{Conditions, DisplayModel, ForecastDay, TemperatureReading};
pub use geocode::LocationResolver;
pub use icons::{resolve_icon, IconId};
pub use map::{MapView, TileLayer};
pub use pipeline::{CityReport, CityReportView, RenderPipeline, RenderRequest};
pub use provider::WeatherProvider;
pub use types::*;
