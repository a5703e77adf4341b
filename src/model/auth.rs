use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the bearer token and the principal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponseDto {
    pub token: String,
    /// Always `Bearer`
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i32,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    /// Club of the advisor, only present for advisors linked to a club.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SignupStudentDto {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Request body for creating an advisor or an admin account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateAccountDto {
    pub name: String,
    pub email: String,
    pub password: String,
}
