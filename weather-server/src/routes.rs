//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather", get(handlers::weather::get_weather))
        .with_state(state)
}
