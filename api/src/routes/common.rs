//! Helpers shared by the `/courses` and `/instructors` handlers.

use crate::response::ApiResponse;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Serialize;
use services::service::ServiceError;

/// Error half of every handler's return type.
pub type ErrorResponse = (StatusCode, Json<ApiResponse<Option<()>>>);

/// Parses a path identifier into the store-native integer id.
///
/// Only positive integers are accepted; anything else yields
/// `400 Unrecognised ID format: {id}!`.
pub fn parse_id(raw: &str) -> Result<i64, ErrorResponse> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(error(
            StatusCode::BAD_REQUEST,
            format!("Unrecognised ID format: {raw}!"),
        )),
    }
}

/// Unwraps a JSON body, turning decoder rejections (malformed JSON, wrong
/// field types, missing content type) into a `400` envelope.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ErrorResponse> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            Err(error(StatusCode::BAD_REQUEST, rejection.body_text()))
        }
    }
}

pub fn error(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (status, Json(ApiResponse::error(message)))
}

/// Maps a service failure onto its status code and the standard envelope.
pub fn error_response(err: ServiceError) -> ErrorResponse {
    let status = match &err {
        ServiceError::Validation(_) | ServiceError::NoChanges(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Duplicate(_) => StatusCode::CONFLICT,
        ServiceError::Database(db_err) => {
            tracing::error!(error = %db_err, "Storage operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error(status, err.to_string())
}

/// Wraps a payload in a success envelope.
pub fn ok<T: Serialize>(
    status: StatusCode,
    data: T,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (status, Json(ApiResponse::success(data, message)))
}
