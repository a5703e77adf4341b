//! Document domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::document::{CreateDocumentDto, DocumentDto},
    server::{error::AppError, util::validate::require_non_blank},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub name: String,
    pub content: String,
    /// Assignment the document is attached to, if any.
    pub assignment_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            content: entity.content,
            assignment_id: entity.assignment_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            name: self.name,
            content: self.content,
            assignment_id: self.assignment_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDocumentParam {
    pub name: String,
    pub content: String,
}

impl CreateDocumentParam {
    pub fn from_dto(dto: CreateDocumentDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_blank("Document name", &dto.name)?,
            content: dto.content,
        })
    }
}
