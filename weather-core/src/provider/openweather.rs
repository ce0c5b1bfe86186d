use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{ProviderError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn current_url(&self) -> String {
        format!("{}/weather", self.base_url)
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str, api_key: &str) -> Result<Value, ProviderError> {
        debug!(city, "requesting current weather from OpenWeather");

        // Failures arrive as JSON with a non-200 `cod`, so the HTTP status is not checked here.
        let body = self
            .http
            .get(self.current_url())
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_url_joins_base_without_double_slash() {
        let provider = OpenWeatherProvider::new("http://localhost:9000/data/2.5/");
        assert_eq!(provider.current_url(), "http://localhost:9000/data/2.5/weather");
    }

    #[test]
    fn default_points_at_openweather() {
        let provider = OpenWeatherProvider::default();
        assert_eq!(
            provider.current_url(),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }
}
