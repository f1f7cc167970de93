use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::orbit::OrbitError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("position computation failed: {0}")]
    Orbit(#[from] OrbitError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
