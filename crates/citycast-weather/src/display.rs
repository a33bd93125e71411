//! Display models handed to the presentation layer.
//!
//! A model is rebuilt from scratch on every render pass; nothing here is
//! updated in place.

use chrono::NaiveDate;
use serde::Serialize;

use crate::classify::ColorCategory;
use crate::icons::IconId;
use crate::map::MapView;
use crate::types::{DailyRepresentative, UnitSystem, WeatherSample};

/// A temperature with its display band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub value: f64,
    pub units: UnitSystem,
    pub color: ColorCategory,
}

impl TemperatureReading {
    pub fn new(value: f64, units: UnitSystem) -> Self {
        Self {
            value,
            units,
            color: ColorCategory::classify(value, units),
        }
    }

    /// Rounded text such as "23 °C". Halves round up, so -2.5 shows as -2.
    pub fn text(&self) -> String {
        // `+ 0.0` folds -0 into 0
        let rounded = (self.value + 0.5).floor() + 0.0;
        format!("{} {}", rounded, self.units.suffix())
    }
}

impl std::fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Conditions block at the top of a widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conditions {
    pub sample: WeatherSample,
    pub reading: TemperatureReading,
    pub icon: Option<IconId>,
}

impl Conditions {
    pub fn new(sample: WeatherSample, units: UnitSystem) -> Self {
        Self {
            reading: TemperatureReading::new(sample.temperature, units),
            icon: IconId::from_condition_code(&sample.condition_code),
            sample,
        }
    }
}

/// One forecast row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day_name: String,
    pub icon: Option<IconId>,
    pub reading: TemperatureReading,
}

impl ForecastDay {
    pub fn new(day: &DailyRepresentative, units: UnitSystem) -> Self {
        Self {
            date: day.date,
            day_name: day.day_name(),
            icon: IconId::from_condition_code(&day.condition_code),
            reading: TemperatureReading::new(day.temperature, units),
        }
    }
}

/// Everything a widget shows for one city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    /// "city1", "city2", ... by list position
    pub widget_id: String,
    /// The query as the user typed it
    pub city_name: String,
    pub units: UnitSystem,
    pub current: Option<Conditions>,
    /// Empty in current mode, up to five rows in forecast mode
    pub forecast: Vec<ForecastDay>,
    pub map: Option<MapView>,
}

impl DisplayModel {
    pub fn new(position: usize, city_name: impl Into<String>, units: UnitSystem) -> Self {
        Self {
            widget_id: widget_id(position),
            city_name: city_name.into(),
            units,
            current: None,
            forecast: Vec::new(),
            map: None,
        }
    }

    pub fn with_current(mut self, sample: WeatherSample) -> Self {
        self.current = Some(Conditions::new(sample, self.units));
        self
    }

    pub fn with_forecast(mut self, days: &[DailyRepresentative]) -> Self {
        self.forecast = days
            .iter()
            .map(|day| ForecastDay::new(day, self.units))
            .collect();
        self
    }

    pub fn with_map(mut self, map: MapView) -> Self {
        self.map = Some(map);
        self
    }
}

/// Widget element id for a zero-based list position
pub fn widget_id(position: usize) -> String {
    format!("city{}", position + 1)
}

/// Map surface id for a zero-based list position
pub fn map_surface_id(position: usize) -> String {
    format!("map{}", position + 1)
}
