//! HTTP plumbing shared by the geocoding and weather endpoints.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types::WeatherError;

pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org";
const USER_AGENT: &str = concat!("CityCast/", env!("CARGO_PKG_VERSION"));

/// Authenticated OpenWeatherMap client. Cheap to clone.
///
/// Every call is a single attempt: no retry and no timeout beyond the
/// transport's own.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Arc<Client>,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, OPENWEATHER_API_BASE)
    }

    /// Client against another host, e.g. a mock server
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: Arc::from(api_key),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with `query` plus the API key and decode the JSON body.
    ///
    /// `endpoint` names the API in error messages.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(endpoint, %url, ?query, "Sending request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", &*self.api_key)])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or_default().to_string();
            tracing::debug!(endpoint, status = status.as_u16(), "Request failed");
            return Err(WeatherError::Api {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        // reqwest errors carry the request URL, which includes the key
        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;
        serde_json::from_slice(&body)
            .map_err(|e| WeatherError::Parse(format!("{endpoint} response: {e}")))
    }
}
