use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role a student holds within a club.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClubRoleNameDto {
    Member,
    BoardMember,
    President,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubDto {
    pub name: String,
    #[serde(default)]
    pub advisor_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignAdvisorDto {
    pub club_id: i32,
    pub advisor_id: i32,
}

/// Identifies a student's membership in a club, used to join or leave.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub student_id: i32,
    pub club_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetMemberRoleDto {
    pub student_id: i32,
    pub club_id: i32,
    pub role: ClubRoleNameDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubMemberDto {
    pub student_id: i32,
    pub name: String,
    pub role: ClubRoleNameDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub advisor_id: Option<i32>,
    /// Empty in list responses, populated by the club view.
    pub members: Vec<ClubMemberDto>,
}
