use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password mismatch.
    ///
    /// Both cases share one message so callers cannot probe for registered names.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but the user it names has since been deleted.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role the operation requires.
    ///
    /// Results in a 403 Forbidden response. The second field is logged, never returned.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 with "Invalid username or password"
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 with "Unauthorized"
/// - `AccessDenied` → 403 with "Forbidden"
///
/// Every error is logged at warn level with its full detail.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self {
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
