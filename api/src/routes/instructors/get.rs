use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, ok, parse_id};
use crate::routes::instructors::common::InstructorResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{instructor::InstructorService, service::Service};
use util::state::AppState;

/// GET /instructors
///
/// Lists every instructor in ascending id order.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "name": "Ada Lovelace",
///       "qualification": "Mathematician",
///       "profile": "First programmer",
///       "coursesTaught": 0,
///       "createdAt": "2026-10-16T08:00:00+00:00",
///       "updatedAt": "2026-10-16T08:00:00+00:00"
///     }
///   ],
///   "message": "Instructors retrieved successfully"
/// }
/// ```
///
/// - `500 Internal Server Error`
pub async fn list_instructors(
    State(app_state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<InstructorResponse>>>), ErrorResponse> {
    let service = InstructorService::from_db(app_state.db_clone());
    let instructors = service.find_all().await.map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        instructors.into_iter().map(InstructorResponse::from).collect(),
        "Instructors retrieved successfully",
    ))
}

/// GET /instructors/{instructor_id}
///
/// ### Responses
///
/// - `200 OK` with the instructor in `data`
/// - `400 Bad Request`
/// ```json
/// { "success": false, "data": null, "message": "Unrecognised ID format: abc!" }
/// ```
/// - `404 Not Found`
/// ```json
/// { "success": false, "data": null, "message": "No such instructor with ID: 9 found!" }
/// ```
pub async fn get_instructor(
    State(app_state): State<AppState>,
    Path(instructor_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<InstructorResponse>>), ErrorResponse> {
    let id = parse_id(&instructor_id)?;
    let service = InstructorService::from_db(app_state.db_clone());
    let instructor = service.find_by_id(id).await.map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        InstructorResponse::from(instructor),
        "Instructor retrieved successfully",
    ))
}
