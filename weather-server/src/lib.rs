//! HTTP layer for the weather & clothing guide.
//!
//! Exposes `GET /api/weather?city=<name>`, which proxies to OpenWeather
//! without revealing the API key to callers.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
