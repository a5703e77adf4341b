use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto, IdQuery, MessageDto},
        student::{StudentDto, UpdateStudentProfileDto},
    },
    server::{
        controller::auth::AUTH_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::student::UpdateStudentProfileParam,
        service::student::StudentService,
        state::AppState,
    },
};

/// Delete a student account.
///
/// Removes the student from every club and assignment, then deletes the student and
/// its user in one transaction. Deleting an unknown id succeeds with an informational
/// message.
///
/// # Access Control
/// - `SelfOrAdmin` - The student themself or an admin
///
/// # Returns
/// - `200 OK` - Student deleted, or did not exist
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the student nor an admin
#[utoipa::path(
    post,
    path = "/auth/deleteStudent",
    tag = AUTH_TAG,
    request_body = IdDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Student deleted or did not exist", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(payload.id)])
        .await?;

    let outcome = StudentService::new(&state.db).delete(payload.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new(outcome.message()))))
}

/// Update a student's profile.
///
/// # Access Control
/// - `SelfOrAdmin` - The student themself or an admin
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Invalid input or name taken
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the student nor an admin
/// - `404 Not Found` - Student does not exist
#[utoipa::path(
    post,
    path = "/auth/updateStudentProfile",
    tag = AUTH_TAG,
    request_body = UpdateStudentProfileDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Profile updated", body = MessageDto),
        (status = 400, description = "Invalid input or name taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this student", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateStudentProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(payload.id)])
        .await?;

    let param = UpdateStudentProfileParam::from_dto(payload)?;

    StudentService::new(&state.db).update_profile(param).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Profile has been edited"))))
}

/// Get a student's public profile.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Student profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Student does not exist
#[utoipa::path(
    get,
    path = "/auth/getStudentInfo",
    tag = AUTH_TAG,
    params(IdQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Student profile", body = StudentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_info(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(student) = StudentService::new(&state.db).get_by_id(query.id).await? else {
        return Err(AppError::NotFound("Student not found".to_string()));
    };

    Ok((StatusCode::OK, Json(student.into_dto())))
}
