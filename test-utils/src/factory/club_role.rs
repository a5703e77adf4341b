//! Factory for club memberships.

use entity::club_role::ClubRoleName;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a student to a club with the given role.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - Id of an existing student
/// - `club_id` - Id of an existing club
/// - `role` - Role the student holds in the club
///
/// # Returns
/// - `Ok(entity::club_role::Model)` - Created membership
/// - `Err(DbErr)` - Database error, e.g. a foreign key violation
pub async fn create_membership_with_role(
    db: &DatabaseConnection,
    student_id: i32,
    club_id: i32,
    role: ClubRoleName,
) -> Result<entity::club_role::Model, DbErr> {
    entity::club_role::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        club_id: ActiveValue::Set(club_id),
        role: ActiveValue::Set(role),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a student to a club as a plain member.
pub async fn create_membership(
    db: &DatabaseConnection,
    student_id: i32,
    club_id: i32,
) -> Result<entity::club_role::Model, DbErr> {
    create_membership_with_role(db, student_id, club_id, ClubRoleName::Member).await
}
