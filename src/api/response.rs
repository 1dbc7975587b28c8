use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;
use crate::summarizer;

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Maps a body that failed to parse onto the error taxonomy.
pub fn rejected(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");

    match rejection {
        // Body larger than the extractor's limit; far beyond MAX_TEXT_CHARS
        rejection if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            summarizer::text_too_long()
        }
        JsonRejection::JsonDataError(err) => {
            AppError::InvalidInput(format!("Invalid input - {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::InvalidInput("Invalid input - expected a JSON body".to_string())
        }
        _ => AppError::InvalidInput("Invalid input - request body is not valid JSON".to_string()),
    }
}

/// Renders a handler panic as a JSON 500 instead of dropping the connection.
pub fn panicked(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
