use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto, IdQuery, MessageDto},
        assignment::{AddDocumentsDto, AssignmentDto, CreateAssignmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::assignment::{AssignmentDetails, AttachDocumentsParam, CreateAssignmentParam},
        service::assignment::AssignmentService,
        state::AppState,
    },
};

/// Tag for grouping assignment endpoints in OpenAPI documentation
pub static ASSIGNMENT_TAG: &str = "assignment";

/// Create an assignment for a club and assign it to students.
///
/// Every assignee id must resolve to a student; duplicates collapse to one.
///
/// # Access Control
/// - `Staff` - Advisors and admins
///
/// # Returns
/// - `200 OK` - Assignment created
/// - `400 Bad Request` - Blank name or malformed due date
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is a student
/// - `404 Not Found` - Club or an assignee does not exist
#[utoipa::path(
    post,
    path = "/assignment/addAssignment",
    tag = ASSIGNMENT_TAG,
    request_body = CreateAssignmentDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Assignment created", body = MessageDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Club or assignee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let param = CreateAssignmentParam::from_dto(payload)?;

    AssignmentService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Assignment added successfully!")),
    ))
}

/// Attach documents to an assignment.
///
/// The request replaces the assignment's document set: documents previously attached
/// but not listed are detached, and listed documents move here from any other
/// assignment.
///
/// # Access Control
/// - `Staff` - Advisors and admins
///
/// # Returns
/// - `200 OK` - Documents attached
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is a student
/// - `404 Not Found` - Assignment or a document does not exist
#[utoipa::path(
    post,
    path = "/assignment/addDocumentsToAssignment",
    tag = ASSIGNMENT_TAG,
    request_body = AddDocumentsDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Documents attached", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Assignment or document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_documents_to_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddDocumentsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    AssignmentService::new(&state.db)
        .attach_documents(AttachDocumentsParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Document added to assignment successfully!")),
    ))
}

/// Delete an assignment, detaching its documents and dropping its assignees.
///
/// # Access Control
/// - `Staff` - Advisors and admins
#[utoipa::path(
    post,
    path = "/assignment/deleteAssignment",
    tag = ASSIGNMENT_TAG,
    request_body = IdDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Assignment deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    AssignmentService::new(&state.db).delete(payload.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Assignment deleted successfully!")),
    ))
}

/// List all assignments ordered by due date.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/assignment/allAssignments",
    tag = ASSIGNMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All assignments", body = Vec<AssignmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_assignments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let assignments = AssignmentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(assignments))))
}

/// Get an assignment with its assignees and documents.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/assignment/assignmentView",
    tag = ASSIGNMENT_TAG,
    params(IdQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Assignment", body = AssignmentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assignment_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(assignment) = AssignmentService::new(&state.db)
        .get_by_id(query.id)
        .await?
    else {
        return Err(AppError::NotFound("Assignment not found".to_string()));
    };

    Ok((StatusCode::OK, Json(assignment.into_dto())))
}

/// List the assignments a student is assigned to.
///
/// # Access Control
/// - `SelfOrStaff` - The student themself, advisors and admins
#[utoipa::path(
    get,
    path = "/assignment/studentAssignments",
    tag = ASSIGNMENT_TAG,
    params(IdQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Assignments of the student", body = Vec<AssignmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not view this student's assignments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn student_assignments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrStaff(query.id)])
        .await?;

    let assignments = AssignmentService::new(&state.db)
        .get_by_student(query.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(assignments))))
}

fn into_dtos(assignments: Vec<AssignmentDetails>) -> Vec<AssignmentDto> {
    assignments
        .into_iter()
        .map(AssignmentDetails::into_dto)
        .collect()
}
