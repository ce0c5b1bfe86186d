use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// DNS, connection, or body read failure. The URL is stripped since it carries the key.
    #[error("request to weather provider failed: {0}")]
    Request(reqwest::Error),

    #[error("weather provider returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.without_url())
    }
}

/// An upstream source of current weather.
///
/// Implementations return the provider body as-is; interpreting its status
/// fields is left to the proxy.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str, api_key: &str) -> Result<Value, ProviderError>;
}
