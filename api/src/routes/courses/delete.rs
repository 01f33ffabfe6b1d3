use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, ok, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{course::CourseService, service::Service};
use util::state::AppState;

/// DELETE /courses/{course_id}
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Course with ID: 1 has been deleted!" }
/// ```
/// - `400 Bad Request` (invalid ID format)
/// - `404 Not Found`
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Option<()>>>), ErrorResponse> {
    let id = parse_id(&course_id)?;
    let service = CourseService::from_db(app_state.db_clone());
    service.delete(id).await.map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        None,
        format!("Course with ID: {id} has been deleted!"),
    ))
}
