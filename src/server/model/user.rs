//! User domain models and parameters.
//!
//! Every account is a `User` row tagged with a `Role`; the role-specific record
//! (student, advisor or admin) shares the user's id and is exposed as a `Profile`.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::{
    model::auth::{CreateAccountDto, SignupStudentDto},
    server::{
        error::AppError,
        model::student::Student,
        util::validate::{validate_email, validate_name, validate_password},
    },
};

/// Role carried by every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Advisor,
    Admin,
}

impl Role {
    /// Authority name used in token claims and the login response.
    pub fn authority(self) -> &'static str {
        match self {
            Self::Student => "ROLE_STUDENT",
            Self::Advisor => "ROLE_ADVISOR",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Advisors and admins manage clubs, assignments and documents.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Advisor | Self::Admin)
    }

    pub fn from_entity(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self::Student,
            UserRole::Advisor => Self::Advisor,
            UserRole::Admin => Self::Admin,
        }
    }

    pub fn into_entity(self) -> UserRole {
        match self {
            Self::Student => UserRole::Student,
            Self::Advisor => UserRole::Advisor,
            Self::Admin => UserRole::Admin,
        }
    }
}

/// Account with credentials and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Login name, unique across all users.
    pub name: String,
    /// Unique across all users.
    pub email: String,
    /// PHC-formatted Argon2id hash.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_entity(entity.role),
            created_at: entity.created_at,
        }
    }
}

/// Advisor record; the club it manages is looked up separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisor {
    pub id: i32,
    pub name: String,
}

impl Advisor {
    pub fn from_entity(entity: entity::advisor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub name: String,
}

impl Admin {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Role-specific record belonging to a user.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Student(Student),
    Advisor(Advisor),
    Admin(Admin),
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated registration request shared by all three account kinds.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    /// Plain-text password, hashed by the service before storage.
    pub password: String,
    /// Profile photo file name, only used for students.
    pub photo: Option<String>,
}

impl RegisterParam {
    /// Validates a student signup request.
    ///
    /// # Returns
    /// - `Ok(RegisterParam)` - Trimmed name/email and the original password
    /// - `Err(AppError::Validation)` - Name, email or password out of bounds
    pub fn from_signup_dto(dto: SignupStudentDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            email: validate_email(&dto.email)?,
            password: {
                validate_password(&dto.password)?;
                dto.password
            },
            photo: dto.photo.filter(|p| !p.trim().is_empty()),
        })
    }

    /// Validates an advisor or admin creation request.
    pub fn from_account_dto(dto: CreateAccountDto) -> Result<Self, AppError> {
        validate_password(&dto.password)?;

        Ok(Self {
            name: validate_name(&dto.name)?,
            email: validate_email(&dto.email)?,
            password: dto.password,
            photo: None,
        })
    }
}
