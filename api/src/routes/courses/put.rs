use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, json_body, ok, parse_id};
use crate::routes::courses::common::{CourseRequest, CourseResponse};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use services::course::CourseService;
use util::state::AppState;

/// PUT /courses/{course_id}
///
/// Updates a course. `title` and `instructor` must be sent on every update;
/// omitted optional fields keep their stored values.
///
/// ### Responses
///
/// - `200 OK` with the updated course (instructor embedded) in `data`
/// - `400 Bad Request` (bad id, undecodable body, missing title/instructor, negative count,
///   or nothing changed)
/// - `404 Not Found`
/// ```json
/// { "success": false, "data": null, "message": "No such course with ID: 8 found!" }
/// ```
/// - `409 Conflict` (another course already pairs this title with this instructor)
pub async fn update_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), ErrorResponse> {
    let id = parse_id(&course_id)?;
    let req = json_body(body)?;
    let service = CourseService::from_db(app_state.db_clone());
    let course = service
        .update(id, req.into())
        .await
        .map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        CourseResponse::from(course),
        "Course updated successfully",
    ))
}
