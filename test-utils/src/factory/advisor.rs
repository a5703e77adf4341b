//! Advisor and admin factories. Both insert the backing user row first.

use crate::factory::user::UserFactory;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an advisor with a generated name and no club.
///
/// # Returns
/// - `Ok(entity::advisor::Model)` - Created advisor; its id is the user id
/// - `Err(DbErr)` - Database error during insert
pub async fn create_advisor(db: &DatabaseConnection) -> Result<entity::advisor::Model, DbErr> {
    let user = UserFactory::new(db).role(UserRole::Advisor).build().await?;

    entity::advisor::ActiveModel {
        id: ActiveValue::Set(user.id),
        name: ActiveValue::Set(user.name),
    }
    .insert(db)
    .await
}

/// Creates an admin with a generated name.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    let user = UserFactory::new(db).role(UserRole::Admin).build().await?;

    entity::admin::ActiveModel {
        id: ActiveValue::Set(user.id),
        name: ActiveValue::Set(user.name),
    }
    .insert(db)
    .await
}
