//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs.
///
/// # Example
///
/// ```rust,ignore
/// let club = ClubFactory::new(&db)
///     .name("Chess Club")
///     .advisor_id(advisor.id)
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    advisor_id: Option<i32>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with name `"Club {id}"` and no advisor.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Club {}", next_id()),
            advisor_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn advisor_id(mut self, advisor_id: i32) -> Self {
        self.advisor_id = Some(advisor_id);
        self
    }

    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            advisor_id: ActiveValue::Set(self.advisor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
