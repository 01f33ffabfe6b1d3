//! HTTP route entry point.
//!
//! Route groups:
//! - `/` → plain-text greeting
//! - `/health` → health check endpoint
//! - `/courses` → course records, instructor embedded
//! - `/instructors` → instructor records

use crate::routes::{
    courses::courses_routes, health::health_routes, instructors::instructors_routes,
};
use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod courses;
pub mod health;
pub mod instructors;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has its state applied and can be layered and served
/// directly, or driven with `oneshot` in tests.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/health", health_routes())
        .nest("/courses", courses_routes())
        .nest("/instructors", instructors_routes())
        .with_state(app_state)
}

/// GET /
async fn root() -> &'static str {
    "Good luck!"
}
