use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require_role;

fn tokens() -> TokenService {
    TokenService::new("test-secret", 3600)
}

/// Builds request headers carrying a valid token for the user.
async fn headers_for(
    db: &DatabaseConnection,
    tokens: &TokenService,
    user_id: i32,
) -> Result<HeaderMap, AppError> {
    let user = UserRepository::new(db).find_by_id(user_id).await?.unwrap();
    let token = tokens.issue(&user)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    Ok(headers)
}
