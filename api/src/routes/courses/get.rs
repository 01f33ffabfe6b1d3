use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, ok, parse_id};
use crate::routes::courses::common::CourseResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::course::CourseService;
use util::state::AppState;

/// GET /courses
///
/// Lists every course with its instructor embedded.
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
///       "title": "Compilers",
///       "instructor": {
///         "id": 2,
///         "name": "Grace Hopper",
///         "qualification": null,
///         "profile": "Compiler pioneer",
///         "coursesTaught": 0,
///         "createdAt": "2026-10-16T08:00:00+00:00",
///         "updatedAt": "2026-10-16T08:00:00+00:00"
///       },
///       "startDate": "2027-02-01T08:00:00+00:00",
///       "endDate": null,
///       "subject": "Computer Science",
///       "description": null,
///       "enrolmentCount": 0,
///       "createdAt": "2026-10-16T08:05:00+00:00",
///       "updatedAt": "2026-10-16T08:05:00+00:00"
///     }
///   ],
///   "message": "Courses retrieved successfully"
/// }
/// ```
///
/// If the referenced instructor was deleted, `instructor` holds the bare id.
pub async fn list_courses(
    State(app_state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<CourseResponse>>>), ErrorResponse> {
    let service = CourseService::from_db(app_state.db_clone());
    let courses = service.list().await.map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        courses.into_iter().map(CourseResponse::from).collect(),
        "Courses retrieved successfully",
    ))
}

/// GET /courses/{course_id}
///
/// ### Responses
///
/// - `200 OK` with the course in `data`
/// - `400 Bad Request` (invalid ID format)
/// - `404 Not Found`
/// ```json
/// { "success": false, "data": null, "message": "No such course with ID: 3 found!" }
/// ```
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), ErrorResponse> {
    let id = parse_id(&course_id)?;
    let service = CourseService::from_db(app_state.db_clone());
    let course = service.get(id).await.map_err(error_response)?;

    Ok(ok(
        StatusCode::OK,
        CourseResponse::from(course),
        "Course retrieved successfully",
    ))
}
