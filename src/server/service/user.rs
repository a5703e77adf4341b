//! Account registration for students, advisors and admins.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        advisor::{AdminRepository, AdvisorRepository},
        student::StudentRepository,
        user::UserRepository,
    },
    error::AppError,
    model::user::{CreateUserParam, Profile, RegisterParam, Role, User},
    service::auth::password::hash_password,
};

pub(crate) const NAME_TAKEN: &str = "Error: Username is already taken!";
pub(crate) const EMAIL_TAKEN: &str = "Error: Email is already in use!";

/// Picks the conflict message for a unique violation on the user table.
pub(crate) fn account_conflict(detail: &str) -> String {
    if detail.contains("email") {
        EMAIL_TAKEN.to_string()
    } else {
        NAME_TAKEN.to_string()
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account of the given role.
    ///
    /// Name is checked before email. The user row and its role-specific profile are
    /// inserted in one transaction so neither exists without the other.
    ///
    /// # Arguments
    /// - `role` - Kind of account to create
    /// - `param` - Validated registration input
    ///
    /// # Returns
    /// - `Ok((User, Profile))` - The created user and its profile
    /// - `Err(AppError::Conflict)` - Name or email already registered
    /// - `Err(AppError::DbErr)` - Database error, nothing was persisted
    pub async fn register(
        &self,
        role: Role,
        param: RegisterParam,
    ) -> Result<(User, Profile), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_name(&param.name).await? {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        if user_repo.exists_by_email(&param.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                role,
            })
            .await
            .map_err(|err| AppError::on_unique_violation(err, account_conflict))?;

        let profile = match role {
            Role::Student => Profile::Student(
                StudentRepository::new(&txn)
                    .create(user.id, user.name.clone(), param.photo)
                    .await?,
            ),
            Role::Advisor => Profile::Advisor(
                AdvisorRepository::new(&txn)
                    .create(user.id, user.name.clone())
                    .await?,
            ),
            Role::Admin => Profile::Admin(
                AdminRepository::new(&txn)
                    .create(user.id, user.name.clone())
                    .await?,
            ),
        };

        txn.commit().await?;

        tracing::info!(
            "Registered {} account {} ({})",
            role.authority(),
            user.name,
            user.id
        );

        Ok((user, profile))
    }

    /// Checks whether any admin account exists yet.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).admin_exists().await?)
    }
}
