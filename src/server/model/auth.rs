//! Login parameters and results.

use crate::{
    model::auth::{JwtResponseDto, LoginDto},
    server::model::user::User,
};

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
    /// Club managed by the user when they are an advisor linked to one.
    pub club_id: Option<i32>,
}

impl LoginResult {
    pub fn into_dto(self) -> JwtResponseDto {
        JwtResponseDto {
            token: self.token,
            token_type: "Bearer".to_string(),
            id: self.user.id,
            username: self.user.name,
            email: self.user.email,
            roles: vec![self.user.role.authority().to_string()],
            club_id: self.club_id,
        }
    }
}
