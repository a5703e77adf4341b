//! Credential checks and bearer token issuance.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginParam, LoginResult},
        user::Role,
    },
    service::auth::{password::verify_password, token::TokenService},
};

/// Service for username/password login.
///
/// Verifies credentials against the stored Argon2id hash and issues a signed bearer
/// token. Unknown users and wrong passwords fail identically.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign the issued token
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates a user and issues a bearer token.
    ///
    /// For advisors linked to a club the result also carries the club id.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Token plus the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown name or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    /// - `Err(AppError::TokenErr)` - Failed to sign the token
    pub async fn login(&self, param: LoginParam) -> Result<LoginResult, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_name(&param.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let club_id = match user.role {
            Role::Advisor => ClubRepository::new(self.db)
                .find_by_advisor(user.id)
                .await?
                .map(|club| club.id),
            Role::Student | Role::Admin => None,
        };

        let token = self.tokens.issue(&user)?;

        tracing::info!("User {} ({}) logged in", user.name, user.id);

        Ok(LoginResult {
            token,
            user,
            club_id,
        })
    }
}
