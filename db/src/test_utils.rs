use crate::connect_to;
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated in-memory SQLite database.
///
/// Each call returns an isolated database, so tests never share rows.
pub async fn setup_test_db() -> DatabaseConnection {
    connect_to("sqlite::memory:")
        .await
        .expect("Failed to set up in-memory db")
}
