use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, json_body, ok};
use crate::routes::instructors::common::{InstructorRequest, InstructorResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use services::instructor::InstructorService;
use util::state::AppState;

/// POST /instructors
///
/// Creates an instructor. `name` is required; `coursesTaught` defaults to 0.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "qualification": "Mathematician",
///   "profile": "First programmer",
///   "coursesTaught": 2
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` with the stored instructor in `data`
/// - `400 Bad Request`
/// ```json
/// { "success": false, "data": null, "message": "The instructor's name is required!" }
/// ```
/// - `400 Bad Request` also covers bodies that do not decode, e.g. a string `coursesTaught`
/// - `409 Conflict`
/// ```json
/// { "success": false, "data": null, "message": "The instructor, Ada Lovelace has already been added!" }
/// ```
pub async fn create_instructor(
    State(app_state): State<AppState>,
    body: Result<Json<InstructorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<InstructorResponse>>), ErrorResponse> {
    let req = json_body(body)?;
    let service = InstructorService::from_db(app_state.db_clone());
    let instructor = service.create(req.into()).await.map_err(error_response)?;

    Ok(ok(
        StatusCode::CREATED,
        InstructorResponse::from(instructor),
        "Instructor created successfully",
    ))
}
