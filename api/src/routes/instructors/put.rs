use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, json_body, ok, parse_id};
use crate::routes::instructors::common::{InstructorRequest, InstructorResponse};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use services::instructor::InstructorService;
use util::state::AppState;

/// PUT /instructors/{instructor_id}
///
/// Updates an instructor. `name` must be sent on every update; omitted
/// optional fields keep their stored values.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "coursesTaught": 3
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` with the updated instructor in `data`
/// - `400 Bad Request` (bad id, undecodable body, missing name, negative counter, or nothing
///   changed)
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "No changes were made to the instructor details that require an update!"
/// }
/// ```
/// - `404 Not Found`
/// - `409 Conflict` (another instructor already has this name and profile)
pub async fn update_instructor(
    State(app_state): State<AppState>,
    Path(instructor_id): Path<String>,
    body: Result<Json<InstructorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<InstructorResponse>>), ErrorResponse> {
    let id = parse_id(&instructor_id)?;
    let req = json_body(body)?;
    let service = InstructorService::from_db(app_state.db_clone());
    let instructor = service
        .update(id, req.into())
        .await
        .map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        InstructorResponse::from(instructor),
        "Instructor updated successfully",
    ))
}
