//! API error handling
//!
//! Every failure leaves the server as `{"error": "<message>"}` with the
//! status picked by the error's kind.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;
use weather_core::{ErrorResult, ProxyError};

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] ProxyError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResult::from(&self.0);
        debug!(%status, error = %body.message, "weather lookup failed");

        (status, Json(body)).into_response()
    }
}
