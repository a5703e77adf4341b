//! Student profile reads, updates and cascading deletion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        assignment::AssignmentRepository, club::ClubRepository, club_role::ClubRoleRepository,
        student::StudentRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        club::MembershipParam,
        student::{DeleteStudentOutcome, Student, UpdateStudentProfileParam},
    },
    service::{
        club::ClubService,
        user::{account_conflict, NAME_TAKEN},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        Ok(StudentRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates a student's profile.
    ///
    /// A changed name must be free and is mirrored to the user row in the same
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated profile
    /// - `Err(AppError::NotFound)` - Student does not exist
    /// - `Err(AppError::Conflict)` - New name belongs to another user
    pub async fn update_profile(
        &self,
        param: UpdateStudentProfileParam,
    ) -> Result<Student, AppError> {
        let Some(current) = StudentRepository::new(self.db).find_by_id(param.id).await? else {
            return Err(AppError::NotFound("Student not found".to_string()));
        };

        let renamed = current.name != param.name;

        if renamed
            && UserRepository::new(self.db)
                .name_taken_by_other(&param.name, param.id)
                .await?
        {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        let txn = self.db.begin().await?;

        if renamed {
            UserRepository::new(&txn)
                .update_name(param.id, &param.name)
                .await
                .map_err(|err| AppError::on_unique_violation(err, account_conflict))?;
        }
        let student = StudentRepository::new(&txn).update(param).await?;

        txn.commit().await?;

        tracing::info!("Updated profile of student {}", student.id);

        Ok(student)
    }

    /// Deletes a student after removing it from every club and assignment.
    ///
    /// All steps run in one transaction; any failure leaves the database unchanged.
    ///
    /// # Returns
    /// - `Ok(DeleteStudentOutcome::Deleted)` - Student and user removed
    /// - `Ok(DeleteStudentOutcome::NotFound)` - No such student, nothing changed
    /// - `Err(AppError)` - A step failed and the transaction was rolled back
    pub async fn delete(&self, id: i32) -> Result<DeleteStudentOutcome, AppError> {
        let txn = self.db.begin().await?;

        if StudentRepository::new(&txn).find_by_id(id).await?.is_none() {
            tracing::debug!("Delete requested for unknown student {}", id);
            return Ok(DeleteStudentOutcome::NotFound);
        }

        let memberships = ClubRoleRepository::new(&txn).get_by_student(id).await?;
        let club_repo = ClubRepository::new(&txn);
        let club_service = ClubService::new(&txn);

        let mut clubs_left = 0;
        for membership in memberships {
            let Some(club) = club_repo.find_by_id(membership.club_id).await? else {
                continue;
            };

            club_service
                .leave(MembershipParam {
                    student_id: id,
                    club_id: club.id,
                })
                .await?;
            clubs_left += 1;
        }

        AssignmentRepository::new(&txn)
            .remove_student_from_all(id)
            .await?;
        StudentRepository::new(&txn).delete(id).await?;
        UserRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted student {} after leaving {} clubs", id, clubs_left);

        Ok(DeleteStudentOutcome::Deleted { clubs_left })
    }
}
