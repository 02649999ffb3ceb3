//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_favorite_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,      // emails
    characters: Vec<String>, // names
    planets: Vec<String>,
    starships: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_favorite_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            starships: Vec::new(),
        }
    }

    /// Add every table of the favorites schema to the test database.
    ///
    /// Creates User, Character, Planet and Starship followed by the three favorite join
    /// tables so the foreign keys resolve.
    pub fn with_favorite_tables(mut self) -> Self {
        self.include_favorite_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user with the provided email during `build()`.
    pub fn with_mock_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Insert a mock character with the provided name during `build()`.
    pub fn with_mock_character(mut self, name: &str) -> Self {
        self.characters.push(name.to_string());
        self
    }

    /// Insert a mock planet with the provided name during `build()`.
    pub fn with_mock_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a mock starship with the provided name during `build()`.
    pub fn with_mock_starship(mut self, name: &str) -> Self {
        self.starships.push(name.to_string());
        self
    }

    /// Build the test context.
    ///
    /// Creates the configured tables, then inserts fixtures in queue order. Fixture rows
    /// receive ids starting at 1 per table in the order they were queued.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut stmts = Vec::new();
        if self.include_favorite_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            stmts.push(schema.create_table_from_entity(entity::prelude::User));
            stmts.push(schema.create_table_from_entity(entity::prelude::Character));
            stmts.push(schema.create_table_from_entity(entity::prelude::Planet));
            stmts.push(schema.create_table_from_entity(entity::prelude::Starship));
            stmts.push(schema.create_table_from_entity(entity::prelude::FavoriteCharacters));
            stmts.push(schema.create_table_from_entity(entity::prelude::FavoritePlanets));
            stmts.push(schema.create_table_from_entity(entity::prelude::FavoriteStarships));
        }
        stmts.extend(self.tables);
        context.with_tables(stmts).await?;

        for email in &self.users {
            context.user().insert_mock_user(email).await?;
        }
        for name in &self.characters {
            context.catalog().insert_mock_character(name).await?;
        }
        for name in &self.planets {
            context.catalog().insert_mock_planet(name).await?;
        }
        for name in &self.starships {
            context.catalog().insert_mock_starship(name).await?;
        }

        Ok(context)
    }
}
