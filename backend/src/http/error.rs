//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Parser output, only filled in when the server runs with `debug`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request carried no body at all
    #[error("request body is empty")]
    EmptyBody,
    /// The body could not be parsed as JSON
    #[error("request body is not valid JSON")]
    InvalidJson { details: Option<String> },
}

impl AppError {
    /// Wrap a JSON parse failure. Parser output is kept only when `expose_details` is set.
    pub fn invalid_json(err: &serde_json::Error, expose_details: bool) -> Self {
        AppError::InvalidJson {
            details: expose_details.then(|| err.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyBody | AppError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyBody => "EMPTY_BODY",
            AppError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut error = ApiError::new(self.code(), self.to_string());
        if let AppError::InvalidJson {
            details: Some(details),
        } = self
        {
            error = error.with_details(details);
        }

        (status, Json(error)).into_response()
    }
}
