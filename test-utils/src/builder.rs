use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{City, User, UserCity};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(City)
///     .with_table(UserCity)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared by `belongs_to` relations.
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing per-user city lists: User, City, UserCity.
    pub fn with_city_tables(self) -> Self {
        self.with_table(User).with_table(City).with_table(UserCity)
    }

    /// Adds the tables backing the clothing catalog and choice history: User, ClothingItem,
    /// UserClothingChoice.
    pub fn with_clothing_tables(self) -> Self {
        self.with_table(User)
            .with_table(ClothingItem)
            .with_table(UserClothingChoice)
    }

    /// Adds the tables backing location logging: User, UserLocation.
    pub fn with_location_tables(self) -> Self {
        self.with_table(User).with_table(UserLocation)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Used by router tests that exercise several endpoints against one database.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(City)
            .with_table(UserCity)
            .with_table(ClothingItem)
            .with_table(UserClothingChoice)
            .with_table(UserLocation)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
