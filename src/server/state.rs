//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool and
//! the token service used to issue and verify bearer tokens.

use sea_orm::DatabaseConnection;

use super::service::auth::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `TokenService` only holds the prepared signing keys.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues tokens on login and verifies them on every guarded request.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
