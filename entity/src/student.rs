//! Student profile keyed by the owning user's id.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub profile_photo: Option<String>,
    pub ge250: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Id",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::club_role::Entity")]
    ClubRole,
    #[sea_orm(has_many = "super::assignment_assignee::Entity")]
    AssignmentAssignee,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::club_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubRole.def()
    }
}

impl Related<super::assignment_assignee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignmentAssignee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
