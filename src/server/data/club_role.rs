//! Club membership repository.
//!
//! A `club_role` row is the only record of a student belonging to a club, so member
//! lists are always derived from it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::club::{ClubMember, MemberRole, Membership};

pub struct ClubRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a student to a club.
    ///
    /// Does not check for an existing membership; the unique (student, club) index
    /// rejects duplicates.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership
    /// - `Err(DbErr)` - Database error, e.g. a foreign key or unique violation
    pub async fn create(
        &self,
        student_id: i32,
        club_id: i32,
        role: MemberRole,
    ) -> Result<Membership, DbErr> {
        let entity = entity::club_role::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            club_id: ActiveValue::Set(club_id),
            role: ActiveValue::Set(role.into_entity()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    /// Finds the membership of a student in a specific club.
    pub async fn find(&self, student_id: i32, club_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::ClubRole::find()
            .filter(entity::club_role::Column::StudentId.eq(student_id))
            .filter(entity::club_role::Column::ClubId.eq(club_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    /// Gets every membership held by a student.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Membership>, DbErr> {
        let entities = entity::prelude::ClubRole::find()
            .filter(entity::club_role::Column::StudentId.eq(student_id))
            .order_by_asc(entity::club_role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Membership::from_entity).collect())
    }

    /// Gets the members of a club with their student names, in join order.
    pub async fn get_members(&self, club_id: i32) -> Result<Vec<ClubMember>, DbErr> {
        let rows = entity::prelude::ClubRole::find()
            .filter(entity::club_role::Column::ClubId.eq(club_id))
            .order_by_asc(entity::club_role::Column::Id)
            .find_also_related(entity::prelude::Student)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, student)| {
                student.map(|student| ClubMember {
                    student_id: student.id,
                    name: student.name,
                    role: MemberRole::from_entity(membership.role),
                })
            })
            .collect())
    }

    /// Changes the role of an existing membership.
    pub async fn update_role(&self, id: i32, role: MemberRole) -> Result<Membership, DbErr> {
        let entity = entity::club_role::ActiveModel {
            id: ActiveValue::Unchanged(id),
            role: ActiveValue::Set(role.into_entity()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    /// Removes a student from a club.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of memberships removed (0 when the student was not a member)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, student_id: i32, club_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ClubRole::delete_many()
            .filter(entity::club_role::Column::StudentId.eq(student_id))
            .filter(entity::club_role::Column::ClubId.eq(club_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
