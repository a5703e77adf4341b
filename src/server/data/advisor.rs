//! Advisor and admin profile repositories.
//!
//! Both profiles are a bare id/name row keyed by the owning user, so they share a module.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::user::{Admin, Advisor};

pub struct AdvisorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdvisorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the advisor profile for an existing user.
    pub async fn create(&self, id: i32, name: String) -> Result<Advisor, DbErr> {
        let entity = entity::advisor::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name),
        }
        .insert(self.db)
        .await?;

        Ok(Advisor::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Advisor>, DbErr> {
        let entity = entity::prelude::Advisor::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Advisor::from_entity))
    }
}

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the admin profile for an existing user.
    pub async fn create(&self, id: i32, name: String) -> Result<Admin, DbErr> {
        let entity = entity::admin::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name),
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }
}
