use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::view::ViewEvent;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("could not reach weather server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather server returned a non-JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the proxy's `/api/weather` endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    server_url: String,
    http: Client,
}

impl ProxyClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetch the proxy body for `city`. Error bodies (4xx/5xx) are returned as `Ok`.
    pub async fn fetch(&self, city: &str) -> Result<Value, ClientError> {
        let url = format!("{}/api/weather", self.server_url);
        debug!(%url, city, "calling weather proxy");

        let body = self
            .http
            .get(url)
            .query(&[("city", city)])
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch and translate the outcome into the event the view expects.
    pub async fn fetch_event(&self, city: &str) -> ViewEvent {
        match self.fetch(city).await {
            Ok(body) => ViewEvent::Responded(body),
            Err(e) => {
                debug!(error = %e, "weather proxy call failed");
                ViewEvent::TransportFailed
            }
        }
    }
}
