use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{config::Config, error::AppError, service::user::UserService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Logs how to bootstrap the first admin when none exists.
///
/// `/auth/createAdmin` stays open until an admin account is present, so a fresh
/// deployment should create one before exposing the API.
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    if UserService::new(db).admin_exists().await? {
        return Ok(());
    }

    tracing::warn!(
        "No admin account exists; POST /auth/createAdmin is open until one is created"
    );

    Ok(())
}

/// CORS policy for the browser client, which is served from a different origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
