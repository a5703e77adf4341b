//! Club creation, advisor linking and membership management.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        advisor::AdvisorRepository, club::ClubRepository, club_role::ClubRoleRepository,
        student::StudentRepository,
    },
    error::AppError,
    model::club::{
        AssignAdvisorParam, Club, ClubWithMembers, CreateClubParam, MemberRole, Membership,
        MembershipParam, SetMemberRoleParam,
    },
};

const ADVISOR_TAKEN: &str = "Error: Advisor is already assigned to a club!";
const ALREADY_MEMBER: &str = "Error: Student is already a member of this club!";

fn club_name_taken(name: &str) -> String {
    format!("Error: Club '{}' already exists!", name)
}

/// Service for clubs and their memberships.
///
/// Generic over the connection so student deletion can call `leave` on its own
/// transaction.
pub struct ClubService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a club, optionally linked to an advisor.
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club
    /// - `Err(AppError::Conflict)` - Name taken or advisor already owns a club
    /// - `Err(AppError::NotFound)` - Advisor does not exist
    pub async fn create(&self, param: CreateClubParam) -> Result<Club, AppError> {
        let club_repo = ClubRepository::new(self.db);

        if club_repo.exists_by_name(&param.name).await? {
            return Err(AppError::Conflict(club_name_taken(&param.name)));
        }

        if let Some(advisor_id) = param.advisor_id {
            self.ensure_advisor_is_free(advisor_id, None).await?;
        }

        let name = param.name.clone();
        let club = club_repo.create(param).await.map_err(|err| {
            AppError::on_unique_violation(err, |detail| {
                if detail.contains("advisor_id") {
                    ADVISOR_TAKEN.to_string()
                } else {
                    club_name_taken(&name)
                }
            })
        })?;

        tracing::info!("Created club {} ({})", club.name, club.id);

        Ok(club)
    }

    /// Links an advisor to a club, replacing the club's previous advisor.
    ///
    /// # Returns
    /// - `Ok(Club)` - The updated club
    /// - `Err(AppError::NotFound)` - Club or advisor does not exist
    /// - `Err(AppError::Conflict)` - Advisor already owns a different club
    pub async fn assign_advisor(&self, param: AssignAdvisorParam) -> Result<Club, AppError> {
        let club_repo = ClubRepository::new(self.db);

        if club_repo.find_by_id(param.club_id).await?.is_none() {
            return Err(AppError::NotFound("Club not found".to_string()));
        }

        self.ensure_advisor_is_free(param.advisor_id, Some(param.club_id))
            .await?;

        let club = club_repo
            .set_advisor(param.club_id, param.advisor_id)
            .await
            .map_err(|err| AppError::on_unique_violation(err, |_| ADVISOR_TAKEN.to_string()))?;

        tracing::info!("Advisor {} now manages club {}", param.advisor_id, club.id);

        Ok(club)
    }

    /// Adds a student to a club as a plain member.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The new membership
    /// - `Err(AppError::NotFound)` - Student or club does not exist
    /// - `Err(AppError::Conflict)` - Student is already a member
    pub async fn join(&self, param: MembershipParam) -> Result<Membership, AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(param.student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        if ClubRepository::new(self.db)
            .find_by_id(param.club_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Club not found".to_string()));
        }

        let role_repo = ClubRoleRepository::new(self.db);

        if role_repo
            .find(param.student_id, param.club_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(ALREADY_MEMBER.to_string()));
        }

        let membership = role_repo
            .create(param.student_id, param.club_id, MemberRole::Member)
            .await
            .map_err(|err| AppError::on_unique_violation(err, |_| ALREADY_MEMBER.to_string()))?;

        tracing::info!(
            "Student {} joined club {}",
            param.student_id,
            param.club_id
        );

        Ok(membership)
    }

    /// Removes a student from a club.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - Student is not a member of the club
    pub async fn leave(&self, param: MembershipParam) -> Result<(), AppError> {
        let removed = ClubRoleRepository::new(self.db)
            .delete(param.student_id, param.club_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound(
                "Student is not a member of this club".to_string(),
            ));
        }

        tracing::info!("Student {} left club {}", param.student_id, param.club_id);

        Ok(())
    }

    /// Changes the role a member holds within a club.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The updated membership
    /// - `Err(AppError::NotFound)` - Student is not a member of the club
    pub async fn set_member_role(&self, param: SetMemberRoleParam) -> Result<Membership, AppError> {
        let role_repo = ClubRoleRepository::new(self.db);

        let Some(membership) = role_repo.find(param.student_id, param.club_id).await? else {
            return Err(AppError::NotFound(
                "Student is not a member of this club".to_string(),
            ));
        };

        Ok(role_repo.update_role(membership.id, param.role).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        Ok(ClubRepository::new(self.db).get_all().await?)
    }

    /// Gets a club with its members.
    ///
    /// # Returns
    /// - `Ok(Some(ClubWithMembers))` - Club found
    /// - `Ok(None)` - No club with that id
    pub async fn get_with_members(&self, id: i32) -> Result<Option<ClubWithMembers>, AppError> {
        let Some(club) = ClubRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let members = ClubRoleRepository::new(self.db).get_members(club.id).await?;

        Ok(Some(ClubWithMembers { club, members }))
    }

    /// Fails unless the advisor exists and manages no club other than `allowed_club`.
    async fn ensure_advisor_is_free(
        &self,
        advisor_id: i32,
        allowed_club: Option<i32>,
    ) -> Result<(), AppError> {
        if AdvisorRepository::new(self.db)
            .find_by_id(advisor_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Advisor not found".to_string()));
        }

        match ClubRepository::new(self.db).find_by_advisor(advisor_id).await? {
            Some(club) if Some(club.id) != allowed_club => {
                Err(AppError::Conflict(ADVISOR_TAKEN.to_string()))
            }
            _ => Ok(()),
        }
    }
}
