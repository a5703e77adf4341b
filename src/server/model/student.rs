//! Student domain models and parameters.

use crate::{
    model::{
        assignment::AssigneeDto,
        student::{StudentDto, UpdateStudentProfileDto},
    },
    server::{error::AppError, util::validate::validate_name},
};

/// Student profile, keyed by the owning user's id.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub profile_photo: Option<String>,
    pub ge250: i32,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            profile_photo: entity.profile_photo,
            ge250: entity.ge250,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            photo_name: self.profile_photo,
            ge250: self.ge250,
        }
    }

    /// Short form used in assignment responses.
    pub fn into_assignee_dto(self) -> AssigneeDto {
        AssigneeDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStudentProfileParam {
    pub id: i32,
    pub name: String,
    pub profile_photo: Option<String>,
    pub ge250: i32,
}

impl UpdateStudentProfileParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Name out of bounds or negative score
    pub fn from_dto(dto: UpdateStudentProfileDto) -> Result<Self, AppError> {
        if dto.ge250 < 0 {
            return Err(AppError::Validation(
                "ge250 must not be negative".to_string(),
            ));
        }

        Ok(Self {
            id: dto.id,
            name: validate_name(&dto.name)?,
            profile_photo: dto.photo_name.filter(|p| !p.trim().is_empty()),
            ge250: dto.ge250,
        })
    }
}

/// Result of a student deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStudentOutcome {
    /// Student and user removed after leaving `clubs_left` clubs.
    Deleted { clubs_left: usize },
    /// No student with that id, nothing was changed.
    NotFound,
}

impl DeleteStudentOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted { .. } => "Student deleted successfully!",
            Self::NotFound => "Student does not exist",
        }
    }
}
