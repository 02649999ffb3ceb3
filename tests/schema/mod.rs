//! Tests against the schema produced by the migrations rather than by the entities.

mod migration;
mod scenario;

use holocron_test_utils::TestError;
use ::migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Connect to an empty in-memory SQLite database and apply every migration
pub async fn migrated_db() -> Result<DatabaseConnection, TestError> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}
