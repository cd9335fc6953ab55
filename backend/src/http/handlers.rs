//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! [`crate::echo`] module for everything that is not HTTP plumbing.

use axum::{body::Bytes, extract::State, Json};

use super::dto::ProcessDataResponse;
use super::error::AppError;
use super::state::AppState;
use crate::echo::{self, EchoReply, InputText};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Static welcome text.
pub async fn welcome() -> &'static str {
    echo::WELCOME_MESSAGE
}

/// POST /process-data
///
/// Echo the body's `input_text` back inside a fixed envelope. The body must
/// be JSON (a leading BOM is tolerated); its `Content-Type` header is not
/// checked.
pub async fn process_data(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<ProcessDataResponse> {
    if body.is_empty() {
        tracing::warn!("Rejecting process-data request without a body");
        return Err(AppError::EmptyBody);
    }

    let value = echo::parse_body(&body).map_err(|e| {
        tracing::warn!(error = %e, body_len = body.len(), "Rejecting malformed JSON body");
        AppError::invalid_json(&e, state.config.debug)
    })?;

    let input = echo::extract_input_text(value);
    match &input {
        InputText::Provided(text) => {
            tracing::debug!(chars = text.chars().count(), "Echoing input_text");
        }
        InputText::Missing => {
            tracing::debug!("input_text missing, echoing empty string");
        }
        InputText::WrongType(kind) => {
            tracing::debug!(kind, "input_text is not a string, echoing empty string");
        }
        InputText::NotAnObject(kind) => {
            tracing::debug!(kind, "Body is not a JSON object, echoing empty string");
        }
    }

    Ok(Json(EchoReply::new(input).into()))
}
