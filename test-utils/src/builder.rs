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
/// use entity::prelude::{User, Student};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`
    /// or one of the table group helpers. Chain method calls to configure the test
    /// environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared on the entity's relations.
    /// Tables should be added in dependency order (tables with foreign keys after the
    /// tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for account operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Student
    /// - Advisor
    /// - Admin
    ///
    /// Use this when testing registration, login, or the auth guard.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(Student)
            .with_table(Advisor)
            .with_table(Admin)
    }

    /// Adds all tables required for club operations.
    ///
    /// This convenience method adds the account tables from `with_user_tables()`
    /// followed by:
    /// - Club
    /// - ClubRole
    ///
    /// Use this when testing membership, advisor linking, or member roles.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_club_tables(self) -> Self {
        self.with_user_tables().with_table(Club).with_table(ClubRole)
    }

    /// Adds every table in the schema.
    ///
    /// This convenience method adds the tables from `with_club_tables()` followed by:
    /// - Assignment
    /// - AssignmentAssignee
    /// - Document
    ///
    /// Use this when testing assignments, documents, student deletion, or the router.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_club_tables()
            .with_table(Assignment)
            .with_table(AssignmentAssignee)
            .with_table(Document)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates a new `TestContext`, connects to a fresh in-memory SQLite database, and
    /// executes all configured CREATE TABLE statements in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
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
