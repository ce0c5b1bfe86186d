//! Weather lookup handler

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// First value of `name`; later duplicates are ignored.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Current weather for a city
///
/// GET /api/weather?city={city}
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    let body = state.proxy.lookup(first_param(&params, "city")).await?;
    Ok(Json(body))
}
