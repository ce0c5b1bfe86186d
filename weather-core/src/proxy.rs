//! Server-side lookup: validates input, injects the credential, and
//! normalizes provider failures.

use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::{
    config::ProviderConfig,
    model::{ErrorKind, WeatherQuery},
    provider::{OpenWeatherProvider, ProviderError, WeatherProvider},
};

/// Environment variable holding the OpenWeather credential.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("City is required")]
    MissingCity,

    #[error("Missing API key. Set OPENWEATHER_API_KEY or run `weather configure`")]
    MissingApiKey,

    /// The provider answered with a non-success `cod`; carries its message.
    #[error("{0}")]
    NotFound(String),

    #[error("Failed to fetch weather data")]
    Upstream(#[source] ProviderError),
}

impl ProxyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProxyError::MissingCity => ErrorKind::BadRequest,
            ProxyError::NotFound(_) => ErrorKind::NotFound,
            ProxyError::MissingApiKey | ProxyError::Upstream(_) => ErrorKind::ServerError,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProxy {
    provider: Arc<dyn WeatherProvider>,
    api_key: Option<String>,
}

impl WeatherProxy {
    /// An empty `api_key` counts as not configured.
    pub fn new(provider: Arc<dyn WeatherProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Proxy backed by OpenWeather at the configured base URL.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            Arc::new(OpenWeatherProvider::new(config.base_url.clone())),
            config.api_key.clone(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up current weather for `city` and return the provider body unmodified.
    #[instrument(skip(self))]
    pub async fn lookup(&self, city: Option<&str>) -> Result<Value, ProxyError> {
        let query = WeatherQuery::new(city)?;
        let api_key = self.api_key.as_deref().ok_or(ProxyError::MissingApiKey)?;

        let body = self
            .provider
            .current_weather(query.city(), api_key)
            .await
            .map_err(|e| {
                warn!(error = %e, "weather provider call failed");
                ProxyError::Upstream(e)
            })?;

        if !is_success(&body) {
            let message = provider_message(&body);
            let cod = body.get("cod").cloned().unwrap_or_default();
            warn!(%cod, %message, "weather provider reported failure");
            return Err(ProxyError::NotFound(message));
        }

        Ok(body)
    }
}

/// Success is the JSON number 200; OpenWeather sends failure codes as strings.
fn is_success(body: &Value) -> bool {
    matches!(body.get("cod"), Some(Value::Number(n)) if n.as_f64() == Some(200.0))
}

fn provider_message(body: &Value) -> String {
    match body.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "Unknown error from weather provider".to_string(),
        Some(other) => other.to_string(),
    }
}
