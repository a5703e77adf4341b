//! Club data repository.
//!
//! Clubs own the advisor link through the unique, nullable `advisor_id` column, so the
//! advisor side of the relation is always answered by a query here.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::club::{Club, CreateClubParam};

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a club.
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club
    /// - `Err(DbErr)` - Database error, including a unique violation on name or advisor
    pub async fn create(&self, param: CreateClubParam) -> Result<Club, DbErr> {
        let entity = entity::club::ActiveModel {
            name: ActiveValue::Set(param.name),
            advisor_id: ActiveValue::Set(param.advisor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Club::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Club>, DbErr> {
        let entity = entity::prelude::Club::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Finds the club managed by an advisor.
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - The advisor's club
    /// - `Ok(None)` - Advisor is not linked to any club
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_advisor(&self, advisor_id: i32) -> Result<Option<Club>, DbErr> {
        let entity = entity::prelude::Club::find()
            .filter(entity::club::Column::AdvisorId.eq(advisor_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Club::from_entity))
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Club::find()
            .filter(entity::club::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all clubs ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Points the club at a new advisor, replacing any previous one.
    ///
    /// # Returns
    /// - `Ok(Club)` - The updated club
    /// - `Err(DbErr::RecordNotUpdated)` - No club with that id
    pub async fn set_advisor(&self, club_id: i32, advisor_id: i32) -> Result<Club, DbErr> {
        let entity = entity::club::ActiveModel {
            id: ActiveValue::Unchanged(club_id),
            advisor_id: ActiveValue::Set(Some(advisor_id)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Club::from_entity(entity))
    }
}
