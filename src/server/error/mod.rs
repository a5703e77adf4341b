//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion logic that
//! turns errors into HTTP responses. `AppError` is the top-level error type returned by
//! every service and handler. It wraps the domain-specific errors (`AuthError`,
//! `ConfigError`) and infrastructure errors, and implements `IntoResponse` so handlers
//! can simply propagate it with `?`.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates every error that can occur in the application and provides automatic
/// conversion to HTTP responses. Most variants use `#[from]` for automatic error
/// conversion. `AuthError` handles its own response mapping, the request-level variants
/// map to 400/404, and everything else becomes a generic 500 with the detail logged
/// server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues prevent
    /// normal application operation. In practice it surfaces from `main` before the
    /// server starts listening.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Unique constraint violations that represent a user-facing conflict should be
    /// converted with `AppError::on_unique_violation` instead of `?`.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// IO error, typically from binding the TCP listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Failure to sign a bearer token.
    ///
    /// Results in 500 Internal Server Error. Verification failures are reported as
    /// `AuthError::InvalidToken` instead and never reach this variant.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Request input failed validation.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing which field was invalid and why
    #[error("{0}")]
    Validation(String),

    /// Request conflicts with existing data.
    ///
    /// Covers duplicate user names and emails, duplicate club names, duplicate
    /// memberships, and advisors already linked to another club. Results in 400 Bad
    /// Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing the conflicting record, e.g. `"Error: Username is already taken!"`
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged but a
    /// generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Converts a unique constraint violation into `Conflict`.
    ///
    /// Uniqueness is checked before writing, but a concurrent request can still insert
    /// the same value between the check and the write. The database constraint then
    /// rejects the second write, and this maps that rejection to the same conflict the
    /// pre-check would have reported. Any other database error stays a `DbErr`.
    ///
    /// # Arguments
    /// - `err` - Error returned by the write
    /// - `message` - Builds the conflict message from the driver's violation detail,
    ///   which names the violated column (e.g. `UNIQUE constraint failed: user.email`)
    ///
    /// # Example
    /// ```rust,ignore
    /// repo.create(param)
    ///     .await
    ///     .map_err(|err| AppError::on_unique_violation(err, |_| "Error: taken!".to_string()))?;
    /// ```
    pub fn on_unique_violation(err: DbErr, message: impl FnOnce(&str) -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(message(&detail)),
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an HTTP status code and an `ErrorDto` body.
/// Authentication errors delegate to their own response handling. Internal errors are
/// logged with full details but return a generic message to avoid leaking
/// implementation details.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `Conflict`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(msg) | Self::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message at error level and returns a generic "Internal server error"
/// body so implementation details never reach the client.
///
/// # Example
/// ```rust,ignore
/// InternalServerError(err).into_response()
/// ```
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
