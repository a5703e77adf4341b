use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{CreateAccountDto, JwtResponseDto, LoginDto, SignupStudentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            auth::LoginParam,
            user::{RegisterParam, Role},
        },
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping authentication and account endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Verifies the credentials and returns a signed bearer token together with the
/// user's identity and roles. Advisors linked to a club also receive the club id.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token and user details
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = JwtResponseDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let result = service.login(LoginParam::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Register a new student account.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Student registered
/// - `400 Bad Request` - Invalid input, or name/email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/signupStudent",
    tag = AUTH_TAG,
    request_body = SignupStudentDto,
    responses(
        (status = 200, description = "Student registered", body = MessageDto),
        (status = 400, description = "Invalid input or name/email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup_student(
    State(state): State<AppState>,
    Json(payload): Json<SignupStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::from_signup_dto(payload)?;

    UserService::new(&state.db)
        .register(Role::Student, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Student registered successfully!")),
    ))
}

/// Create an advisor account.
///
/// The advisor starts without a club; link one with `/club/assignAdvisor`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Advisor created, message includes the new id
/// - `400 Bad Request` - Invalid input, or name/email already registered
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/auth/createAdvisor",
    tag = AUTH_TAG,
    request_body = CreateAccountDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Advisor created", body = MessageDto),
        (status = 400, description = "Invalid input or name/email taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_advisor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = RegisterParam::from_account_dto(payload)?;

    let (user, _) = UserService::new(&state.db)
        .register(Role::Advisor, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Advisor created successfully! {}",
            user.id
        ))),
    ))
}

/// Create an admin account.
///
/// Open to anyone while no admin exists so the first admin can be bootstrapped;
/// afterwards only admins may create further admins.
///
/// # Access Control
/// - Public while no admin exists, then `Admin`
///
/// # Returns
/// - `200 OK` - Admin created
/// - `400 Bad Request` - Invalid input, or name/email already registered
/// - `401 Unauthorized` - Missing or invalid token once an admin exists
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/auth/createAdmin",
    tag = AUTH_TAG,
    request_body = CreateAccountDto,
    security((), ("bearer" = [])),
    responses(
        (status = 200, description = "Admin created", body = MessageDto),
        (status = 400, description = "Invalid input or name/email taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    if service.admin_exists().await? {
        let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
            .require(&[Permission::Admin])
            .await?;
    }

    let param = RegisterParam::from_account_dto(payload)?;

    service.register(Role::Admin, param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Admin created successfully!")),
    ))
}
