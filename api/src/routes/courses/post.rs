use crate::response::ApiResponse;
use crate::routes::common::{ErrorResponse, error_response, json_body, ok};
use crate::routes::courses::common::{CourseRequest, CourseResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use services::course::CourseService;
use util::state::AppState;

/// POST /courses
///
/// Creates a course. `title` and `instructor` are required; `enrolmentCount`
/// defaults to 0. The instructor id is not checked against the instructors
/// collection.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Compilers",
///   "instructor": 2,
///   "startDate": "2027-02-01T08:00:00Z",
///   "subject": "Computer Science"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` with the stored course (instructor embedded) in `data`
/// - `400 Bad Request`
/// ```json
/// { "success": false, "data": null, "message": "The course's title and its instructor are required!" }
/// ```
/// - `400 Bad Request` also covers bodies that do not decode, e.g. a string `instructor`
/// - `409 Conflict`
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "The course Compilers, taught by instructor 2 has already been added!"
/// }
/// ```
pub async fn create_course(
    State(app_state): State<AppState>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), ErrorResponse> {
    let req = json_body(body)?;
    let service = CourseService::from_db(app_state.db_clone());
    let course = service.create(req.into()).await.map_err(error_response)?;

    Ok(ok(
        StatusCode::CREATED,
        CourseResponse::from(course),
        "Course created successfully",
    ))
}
