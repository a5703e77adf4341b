//! Club with an optional, exclusive advisor.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Owning advisor. Unique, so an advisor owns at most one club.
    #[sea_orm(unique)]
    pub advisor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::advisor::Entity",
        from = "Column::AdvisorId",
        to = "super::advisor::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Advisor,
    #[sea_orm(has_many = "super::club_role::Entity")]
    ClubRole,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::advisor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advisor.def()
    }
}

impl Related<super::club_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubRole.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
