//! What the map collaborator draws for a widget: a base map plus a
//! precipitation overlay centered on the city.

use serde::Serialize;

use crate::types::Coordinate;

pub const DEFAULT_ZOOM: u8 = 10;

const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const PRECIPITATION_TILES: &str =
    "https://tile.openweathermap.org/map/precipitation_cls/{z}/{x}/{y}.png";
const OWM_ATTRIBUTION: &str =
    "Map data © <a href=\"https://openweathermap.org/\">OpenWeatherMap</a>";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: &'static str,
    pub max_zoom: Option<u8>,
    pub opacity: f32,
}

/// Map surface description, layers in draw order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub surface_id: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub layers: Vec<TileLayer>,
}

impl MapView {
    pub fn new(center: Coordinate, surface_id: impl Into<String>, api_key: &str) -> Self {
        let base = TileLayer {
            url_template: OSM_TILES.to_string(),
            attribution: OSM_ATTRIBUTION,
            max_zoom: None,
            opacity: 1.0,
        };
        let precipitation = TileLayer {
            url_template: format!("{PRECIPITATION_TILES}?appid={api_key}"),
            attribution: OWM_ATTRIBUTION,
            max_zoom: Some(19),
            opacity: 0.7,
        };

        Self {
            surface_id: surface_id.into(),
            center,
            zoom: DEFAULT_ZOOM,
            layers: vec![base, precipitation],
        }
    }
}
