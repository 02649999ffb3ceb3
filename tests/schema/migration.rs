//! Tests for the table layout created by the migration crate.

use holocron_test_utils::TestError;
use migration::{Migrator, MigratorTrait, SchemaManager};

use super::migrated_db;

static TABLES: [&str; 7] = [
    "user",
    "character",
    "planet",
    "starship",
    "favoritecharacters",
    "favoriteplanets",
    "favoritestarships",
];

/// Tests that every table exists after migrating up.
///
/// Expected: all seven tables present, with the camelCase user name columns
#[tokio::test]
async fn creates_all_tables() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let manager = SchemaManager::new(&db);

    for table in TABLES {
        assert!(manager.has_table(table).await?, "missing table {table}");
    }
    assert!(manager.has_column("user", "firstName").await?);
    assert!(manager.has_column("user", "lastName").await?);
    assert!(manager.has_column("favoriteplanets", "planet_id").await?);

    Ok(())
}

/// Tests that migrating down removes every table.
///
/// Expected: no table from the favorites schema remains
#[tokio::test]
async fn drops_all_tables() -> Result<(), TestError> {
    let db = migrated_db().await?;

    Migrator::down(&db, None).await?;

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await?, "table {table} was not dropped");
    }

    Ok(())
}

/// Tests that running the migrations twice is a no-op.
///
/// Expected: Ok, with no pending migrations left
#[tokio::test]
async fn migrating_twice_is_idempotent() -> Result<(), TestError> {
    let db = migrated_db().await?;

    Migrator::up(&db, None).await?;

    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());

    Ok(())
}
