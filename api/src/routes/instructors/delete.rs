use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, ok, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{instructor::InstructorService, service::Service};
use util::state::AppState;

/// DELETE /instructors/{instructor_id}
///
/// Removes an instructor. Courses that reference it are left untouched.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Instructor with ID: 4 has been deleted!" }
/// ```
/// - `400 Bad Request` (invalid ID format)
/// - `404 Not Found`
pub async fn delete_instructor(
    State(app_state): State<AppState>,
    Path(instructor_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Option<()>>>), ErrorResponse> {
    let id = parse_id(&instructor_id)?;
    let service = InstructorService::from_db(app_state.db_clone());
    service.delete(id).await.map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        None,
        format!("Instructor with ID: {id} has been deleted!"),
    ))
}
