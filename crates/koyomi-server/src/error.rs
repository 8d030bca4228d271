//! Server error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use koyomi_events::EventError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Malformed path or body, or a payload that failed validation
    #[error("{0}")]
    InvalidRequest(String),

    /// The addressed resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Store or other server-side failure
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<koyomi_core::Error> for ServerError {
    fn from(e: koyomi_core::Error) -> Self {
        ServerError::InvalidRequest(e.to_string())
    }
}

impl From<EventError> for ServerError {
    fn from(e: EventError) -> Self {
        match e {
            EventError::Invalid(e) => e.into(),
            EventError::NotFound(id) => ServerError::NotFound(format!("event {id} not found")),
            EventError::Store(e) => {
                error!(error = %e, "event store failure");
                ServerError::Internal("event store unavailable".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}
