//! Assignment domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::assignment::{AddDocumentsDto, AssignmentDto, CreateAssignmentDto},
    server::{
        error::AppError,
        model::{document::Document, student::Student},
        util::{parse::parse_date, validate::require_non_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub club_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn from_entity(entity: entity::assignment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            due_date: entity.due_date,
            club_id: entity.club_id,
            created_at: entity.created_at,
        }
    }
}

/// Assignment with its resolved assignees and attached documents.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDetails {
    pub assignment: Assignment,
    pub assignees: Vec<Student>,
    pub documents: Vec<Document>,
}

impl AssignmentDetails {
    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.assignment.id,
            name: self.assignment.name,
            description: self.assignment.description,
            due_date: self.assignment.due_date,
            club_id: self.assignment.club_id,
            created_at: self.assignment.created_at,
            assignees: self
                .assignees
                .into_iter()
                .map(Student::into_assignee_dto)
                .collect(),
            documents: self.documents.into_iter().map(Document::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAssignmentParam {
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub club_id: i32,
    /// Distinct student ids in request order.
    pub assignee_ids: Vec<i32>,
}

impl CreateAssignmentParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Blank name or malformed due date
    pub fn from_dto(dto: CreateAssignmentDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_blank("Assignment name", &dto.name)?,
            description: dto.description,
            due_date: parse_date(&dto.due_date)?,
            club_id: dto.club_id,
            assignee_ids: dedup_ids(dto.assignees),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AttachDocumentsParam {
    pub assignment_id: i32,
    /// Distinct document ids in request order.
    pub document_ids: Vec<i32>,
}

impl AttachDocumentsParam {
    pub fn from_dto(dto: AddDocumentsDto) -> Self {
        Self {
            assignment_id: dto.assignment_id,
            document_ids: dedup_ids(dto.document_ids),
        }
    }
}

/// Removes repeated ids while keeping first-seen order.
fn dedup_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
