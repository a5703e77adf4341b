//! Membership of a student in a club, with the role the student holds there.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ClubRoleName {
    #[sea_orm(string_value = "member")]
    Member,
    #[sea_orm(string_value = "board_member")]
    BoardMember,
    #[sea_orm(string_value = "president")]
    President,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// A student holds at most one role per club.
    #[sea_orm(unique_key = "student_club")]
    pub student_id: i32,
    #[sea_orm(unique_key = "student_club")]
    pub club_id: i32,
    pub role: ClubRoleName,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Club,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
