use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto, IdQuery, MessageDto},
        document::{CreateDocumentDto, DocumentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::document::CreateDocumentParam,
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Create a document not yet attached to any assignment.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Document created, message includes the new id
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/document/addDocument",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Document created", body = MessageDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = CreateDocumentParam::from_dto(payload)?;

    let document = DocumentService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Document added successfully! {}",
            document.id
        ))),
    ))
}

/// List all documents.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/document/allDocuments",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All documents", body = Vec<DocumentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let documents: Vec<DocumentDto> = DocumentService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|document| document.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(documents)))
}

/// Get a document by id.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/document/documentView",
    tag = DOCUMENT_TAG,
    params(IdQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Document", body = DocumentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn document_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(document) = DocumentService::new(&state.db).get_by_id(query.id).await? else {
        return Err(AppError::NotFound("Document not found".to_string()));
    };

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Delete a document.
///
/// # Access Control
/// - `Staff` - Advisors and admins
///
/// # Returns
/// - `200 OK` - Document deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is a student
/// - `404 Not Found` - Document does not exist
#[utoipa::path(
    post,
    path = "/document/deleteDocument",
    tag = DOCUMENT_TAG,
    request_body = IdDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Document deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    DocumentService::new(&state.db).delete(payload.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Document deleted successfully!")),
    ))
}
