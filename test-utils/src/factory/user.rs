//! User factory for creating test user entities.
//!
//! Users are the login accounts every role hangs off. Most tests want one of the
//! role-specific factories (`student`, `advisor`, `admin`) which create the user too.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("alice")
///     .email("alice@example.com")
///     .role(UserRole::Advisor)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: a placeholder that never verifies
    /// - role: `UserRole::Student`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::Student,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash. Pass a real Argon2 PHC string for login tests.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student-role user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
