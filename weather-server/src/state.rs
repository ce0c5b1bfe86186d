//! Application state shared across handlers

use std::sync::Arc;

use weather_core::WeatherProxy;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Holds the credential fixed at start-up; read-only afterwards.
    pub proxy: Arc<WeatherProxy>,
}

impl AppState {
    pub fn new(proxy: WeatherProxy) -> Self {
        Self {
            proxy: Arc::new(proxy),
        }
    }
}
