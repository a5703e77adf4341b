use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdQuery, MessageDto},
        club::{AssignAdvisorDto, ClubDto, CreateClubDto, MembershipDto, SetMemberRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::club::{AssignAdvisorParam, CreateClubParam, MembershipParam, SetMemberRoleParam},
        service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// Create a club, optionally linking an advisor.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Club created, message includes the new id
/// - `400 Bad Request` - Invalid name, name taken, or advisor already owns a club
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Advisor does not exist
#[utoipa::path(
    post,
    path = "/club/createClub",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Club created", body = MessageDto),
        (status = 400, description = "Invalid input or conflict", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Advisor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateClubParam::from_dto(payload)?;

    let club = ClubService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Club created successfully! {}", club.id))),
    ))
}

/// Link an advisor to a club, replacing any previous advisor.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Advisor assigned
/// - `400 Bad Request` - Advisor already owns a different club
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Club or advisor does not exist
#[utoipa::path(
    post,
    path = "/club/assignAdvisor",
    tag = CLUB_TAG,
    request_body = AssignAdvisorDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Advisor assigned", body = MessageDto),
        (status = 400, description = "Advisor already owns a club", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Club or advisor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_advisor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AssignAdvisorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ClubService::new(&state.db)
        .assign_advisor(AssignAdvisorParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Advisor assigned successfully!")),
    ))
}

/// Add a student to a club as a regular member.
///
/// # Access Control
/// - `SelfOrAdmin` - The student themself or an admin
///
/// # Returns
/// - `200 OK` - Student joined
/// - `400 Bad Request` - Student is already a member
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the student nor an admin
/// - `404 Not Found` - Student or club does not exist
#[utoipa::path(
    post,
    path = "/club/joinClub",
    tag = CLUB_TAG,
    request_body = MembershipDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Student joined the club", body = MessageDto),
        (status = 400, description = "Already a member", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not act for this student", body = ErrorDto),
        (status = 404, description = "Student or club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = MembershipParam::from_dto(payload);

    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(param.student_id)])
        .await?;

    ClubService::new(&state.db).join(param).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Joined club successfully!"))))
}

/// Remove a student from a club.
///
/// # Access Control
/// - `SelfOrAdmin` - The student themself or an admin
///
/// # Returns
/// - `200 OK` - Student left
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the student nor an admin
/// - `404 Not Found` - Student is not a member of the club
#[utoipa::path(
    post,
    path = "/club/leaveClub",
    tag = CLUB_TAG,
    request_body = MembershipDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Student left the club", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not act for this student", body = ErrorDto),
        (status = 404, description = "Not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = MembershipParam::from_dto(payload);

    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(param.student_id)])
        .await?;

    ClubService::new(&state.db).leave(param).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Left club successfully!"))))
}

/// Change a member's role within a club.
///
/// # Access Control
/// - `Staff` - Advisors and admins
///
/// # Returns
/// - `200 OK` - Role updated
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is a student
/// - `404 Not Found` - Student is not a member of the club
#[utoipa::path(
    post,
    path = "/club/setMemberRole",
    tag = CLUB_TAG,
    request_body = SetMemberRoleDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Member role updated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_member_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetMemberRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    ClubService::new(&state.db)
        .set_member_role(SetMemberRoleParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Member role updated successfully!")),
    ))
}

/// List all clubs ordered by name.
///
/// Members are not resolved here; use `/club/clubView` for a single club's roster.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/club/allClubs",
    tag = CLUB_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All clubs", body = Vec<ClubDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_clubs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let clubs: Vec<ClubDto> = ClubService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|club| club.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(clubs)))
}

/// Get a club with its members and their roles.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/club/clubView",
    tag = CLUB_TAG,
    params(IdQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Club with members", body = ClubDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn club_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(club) = ClubService::new(&state.db)
        .get_with_members(query.id)
        .await?
    else {
        return Err(AppError::NotFound("Club not found".to_string()));
    };

    Ok((StatusCode::OK, Json(club.into_dto())))
}
