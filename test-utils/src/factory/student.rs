//! Student factory. Inserts the backing user row first so ids line up.

use crate::factory::user::UserFactory;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: Option<String>,
    profile_photo: Option<String>,
    ge250: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory. The name defaults to the generated user name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: None,
            profile_photo: None,
            ge250: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn profile_photo(mut self, photo: impl Into<String>) -> Self {
        self.profile_photo = Some(photo.into());
        self
    }

    pub fn ge250(mut self, ge250: i32) -> Self {
        self.ge250 = ge250;
        self
    }

    /// Inserts a student-role user and the matching student row.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student; its id is the user id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let mut user = UserFactory::new(self.db).role(UserRole::Student);
        if let Some(name) = &self.name {
            user = user.name(name.clone());
        }
        let user = user.build().await?;

        entity::student::ActiveModel {
            id: ActiveValue::Set(user.id),
            name: ActiveValue::Set(self.name.unwrap_or(user.name)),
            profile_photo: ActiveValue::Set(self.profile_photo),
            ge250: ActiveValue::Set(self.ge250),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
