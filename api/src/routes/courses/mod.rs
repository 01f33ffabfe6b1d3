//! # Courses Routes Module
//!
//! Wires up the `/courses` endpoint group. Every course returned by these
//! routes carries its instructor embedded in the `instructor` field.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_course;
use get::{get_course, list_courses};
use post::create_course;
use put::update_course;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/courses` route group.
///
/// - `GET /courses` → `list_courses`
/// - `POST /courses` → `create_course`
/// - `GET /courses/{course_id}` → `get_course`
/// - `PUT /courses/{course_id}` → `update_course`
/// - `DELETE /courses/{course_id}` → `delete_course`
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/", post(create_course))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(update_course))
        .route("/{course_id}", delete(delete_course))
}
