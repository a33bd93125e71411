//! Forward geocoding: free-text city queries to coordinates.

use tracing::instrument;

use crate::api::ApiClient;
use crate::types::{CityQuery, Place, WeatherError};
use crate::wire::GeoMatch;

const GEOCODE_PATH: &str = "/geo/1.0/direct";

/// Resolves a query to its single best match
#[derive(Debug, Clone)]
pub struct LocationResolver {
    api: ApiClient,
}

impl LocationResolver {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Look up `query`, asking the provider for exactly one match.
    ///
    /// Blank queries are answered with `NotFound` without a request.
    #[instrument(skip(self, query), fields(query = %query), level = "info")]
    pub async fn resolve(&self, query: &CityQuery) -> Result<Place, WeatherError> {
        if query.is_blank() {
            return Err(WeatherError::NotFound(query.to_string()));
        }

        let matches: Vec<GeoMatch> = self
            .api
            .get_json(
                "Geolocation",
                GEOCODE_PATH,
                &[("q", query.as_str().to_string()), ("limit", "1".to_string())],
            )
            .await?;

        let place = matches
            .into_iter()
            .next()
            .map(Place::from)
            .ok_or_else(|| WeatherError::NotFound(query.to_string()))?;

        tracing::debug!(
            "Resolved {} to {} ({:.4}, {:.4})",
            query,
            place.name,
            place.coordinate.latitude,
            place.coordinate.longitude
        );
        Ok(place)
    }
}
