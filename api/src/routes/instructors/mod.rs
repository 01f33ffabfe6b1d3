//! # Instructors Routes Module
//!
//! Wires up the `/instructors` endpoint group.
//!
//! ## Structure
//! - `get.rs` - list and fetch instructors
//! - `post.rs` - create an instructor
//! - `put.rs` - update an instructor
//! - `delete.rs` - delete an instructor
//! - `common.rs` - request/response shapes

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_instructor;
use get::{get_instructor, list_instructors};
use post::create_instructor;
use put::update_instructor;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/instructors` route group.
///
/// - `GET /instructors` → `list_instructors`
/// - `POST /instructors` → `create_instructor`
/// - `GET /instructors/{instructor_id}` → `get_instructor`
/// - `PUT /instructors/{instructor_id}` → `update_instructor`
/// - `DELETE /instructors/{instructor_id}` → `delete_instructor`
pub fn instructors_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_instructors))
        .route("/", post(create_instructor))
        .route("/{instructor_id}", get(get_instructor))
        .route("/{instructor_id}", put(update_instructor))
        .route("/{instructor_id}", delete(delete_instructor))
}
