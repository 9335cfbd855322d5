use anyhow::anyhow;
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::Error;
use crate::model::{Current, Forecast};
use crate::query::Query;
use crate::transport::Transport;

/// Base URL for the OpenWeatherMap data API.
pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the current-weather and forecast endpoints.
///
/// Holds an injected [`Transport`] and the `appid` key. The client itself is
/// stateless between calls; methods take `&self`, so a single instance can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
    api_key: String,
    base_url: String,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different service root, e.g. a local test
    /// server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the current weather for the queried location.
    ///
    /// A single attempt: transport failures, non-200 HTTP statuses, bodies
    /// that do not decode, and embedded error envelopes are each returned as
    /// the corresponding [`Error`] variant.
    pub async fn fetch_current(&self, query: &Query) -> Result<Current, Error> {
        tracing::debug!("requesting current weather: {}", query.params());

        let body = self.get(&self.endpoint_url("weather", query)).await?;
        let current: Current = serde_json::from_str(&body)?;

        // The service reports some failures inside an HTTP 200 body.
        if current.cod != 200 {
            let message = current.message.clone().unwrap_or_default();
            tracing::warn!("current weather rejected: {} [{}]", message, current.cod);
            return Err(Error::ApiStatus {
                code: current.cod.to_string(),
                message,
            });
        }
        Ok(current)
    }

    /// Fetch the 5 day / 3 hours forecast for the queried location.
    ///
    /// Same flow as [`Client::fetch_current`]; note that this endpoint's
    /// envelope carries its status code as the string `"200"`.
    pub async fn fetch_forecast(&self, query: &Query) -> Result<Forecast, Error> {
        tracing::debug!("requesting forecast: {}", query.params());

        let body = self.get(&self.endpoint_url("forecast", query)).await?;
        let forecast: Forecast = serde_json::from_str(&body)?;

        if forecast.cod != "200" {
            tracing::warn!("forecast rejected: {} [{}]", forecast.message, forecast.cod);
            return Err(Error::ApiStatus {
                code: forecast.cod.clone(),
                message: forecast.message.to_string(),
            });
        }
        Ok(forecast)
    }

    fn endpoint_url(&self, endpoint: &str, query: &Query) -> String {
        format!(
            "{}/{}?{}&appid={}",
            self.base_url,
            endpoint,
            query.params(),
            self.api_key
        )
    }

    async fn get(&self, url: &str) -> Result<String, Error> {
        let response = self
            .transport
            .get(url)
            .await
            .map_err(|source| Error::Transport {
                url: url.to_owned(),
                source,
            })?;

        if response.status != StatusCode::OK {
            return Err(Error::HttpStatus(response.status));
        }
        Ok(response.body)
    }
}

impl Client<reqwest::Client> {
    /// Client backed by a default `reqwest::Client`.
    pub fn new_http(api_key: impl Into<String>) -> Self {
        Self::new(reqwest::Client::new(), api_key)
    }

    /// Client using the API key stored in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: set `api_key` in the config file (see `Config::config_file_path`) \
                 or pass a key to `Client::new` directly."
            )
        })?;

        Ok(Self::new_http(api_key.to_owned()))
    }
}
