use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
    service::auth::token::TokenService,
};

/// Access requirement checked by `AuthGuard::require`.
///
/// Every listed permission must hold; an empty list only requires a valid token.
pub enum Permission {
    /// Principal must be an admin.
    Admin,
    /// Principal must be an advisor or an admin.
    Staff,
    /// Principal must be the given user, or an admin.
    SelfOrAdmin(i32),
    /// Principal must be the given user, an advisor, or an admin.
    SelfOrStaff(i32),
}

/// Resolves the bearer token on a request to a user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and enforces `permissions`.
    ///
    /// The user is reloaded from the database so deleted accounts lose access
    /// immediately even while their token is unexpired.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying every permission
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.id).into());
        };

        for permission in permissions {
            let allowed = match permission {
                Permission::Admin => user.role == Role::Admin,
                Permission::Staff => user.role.is_staff(),
                Permission::SelfOrAdmin(id) => user.id == *id || user.role == Role::Admin,
                Permission::SelfOrStaff(id) => user.id == *id || user.role.is_staff(),
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!(
                        "{} lacks required permission {}",
                        user.role.authority(),
                        permission.describe()
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}

impl Permission {
    fn describe(&self) -> String {
        match self {
            Self::Admin => "Admin".to_string(),
            Self::Staff => "Staff".to_string(),
            Self::SelfOrAdmin(id) => format!("SelfOrAdmin({})", id),
            Self::SelfOrStaff(id) => format!("SelfOrStaff({})", id),
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
