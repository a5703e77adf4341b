//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing login accounts. It handles user
//! creation, lookups by id and name, uniqueness checks and deletion, converting entity
//! models to domain models at the repository boundary.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user accounts.
///
/// Generic over the connection so the same queries run on the pool or inside a
/// transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Name, email, password hash and role of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated id
    /// - `Err(DbErr)` - Database error, including unique violations on name or email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.into_entity()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by login name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a user other than `id` already uses `name`.
    ///
    /// Used when renaming so a user keeping their own name is not a conflict.
    pub async fn name_taken_by_other(&self, name: &str, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .filter(entity::user::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Renames a user.
    ///
    /// # Returns
    /// - `Ok(())` - Name updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, id: i32, name: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Name,
                sea_orm::sea_query::Expr::value(name),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the user did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Checks if any admin accounts exist.
    ///
    /// Used to keep `createAdmin` open during first-time setup and to warn at startup.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admins yet
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
