//! Core library for the weather & clothing guide.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and the proxy that guards it
//! - Shared domain models (queries, results, error bodies)
//! - The clothing suggestion engine
//! - The client-side view state machine and the proxy HTTP client
//!
//! It is used by `weather-server` and `weather-cli`.

pub mod client;
pub mod config;
pub mod model;
pub mod provider;
pub mod proxy;
pub mod suggestion;
pub mod view;

pub use client::{ClientError, ProxyClient};
pub use config::{ClientConfig, Config, ProviderConfig, ServerConfig};
pub use model::{Condition, ErrorKind, ErrorResult, Readings, WeatherQuery, WeatherResult};
pub use provider::{OpenWeatherProvider, ProviderError, WeatherProvider};
pub use proxy::{API_KEY_ENV, ProxyError, WeatherProxy};
pub use suggestion::{ClothingSuggestion, suggest};
pub use view::{Fetch, Phase, ViewEvent, ViewState, WeatherCard};
