use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context containing the database connection for an isolated test.
///
/// Provides an in-memory SQLite database connection for unit and integration testing.
/// The database is created lazily on first access and persists for the lifetime of the
/// test context. SeaORM opens in-memory SQLite with a single pooled connection, so
/// every repository and transaction in a test shares the same database.
///
/// # Example
///
/// ```rust,ignore
/// let mut test = TestContext::new();
/// let db = test.database().await?;
///
/// let user = factory::create_user(db).await?;
/// ```
pub struct TestContext {
    /// Optional database connection to the in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test. Tests built through
    /// `TestBuilder` find it already set and read it with `test.db.as_ref().unwrap()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// Initializes a test context with no database connection. The connection is
    /// created lazily when `database()` is first called.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// Returns a reference to the existing connection if one exists, otherwise creates
    /// a new in-memory SQLite database and stores the connection. Each context gets its
    /// own database, so tests never observe each other's rows.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each CREATE TABLE statement in sequence to set up the schema required
    /// by the test. Statements carry the foreign keys and unique keys declared on the
    /// entities. Typically called internally by `TestBuilder::build()` rather than
    /// directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables (invalid SQL,
    ///   a referenced table that was not created first, etc.)
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
