//! Typed errors and the single HTTP mapping every handler shares.
//!
//! Clients see exactly two failure bodies: the connection-failure message
//! and the generic one. Cause detail stays in the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database connection failed")]
    ConnectionFailed,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad payload: {0}")]
    BadPayload(String),
}

impl ApiError {
    /// The fixed body text a client receives for this failure.
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::ConnectionFailed => "Database connection failed.",
            ApiError::Db(_) | ApiError::BadPayload(_) => "An error occurred.",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Connection failures are logged at the gateway with their cause.
        if !matches!(self, ApiError::ConnectionFailed) {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.client_message(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
