use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::document::DocumentDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Format: "YYYY-MM-DD"
    #[serde(rename = "due_date")]
    pub due_date: String,
    pub club_id: i32,
    #[serde(default)]
    pub assignees: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDocumentsDto {
    pub assignment_id: i32,
    pub document_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AssigneeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(rename = "due_date")]
    pub due_date: NaiveDate,
    pub club_id: i32,
    pub created_at: DateTime<Utc>,
    pub assignees: Vec<AssigneeDto>,
    pub documents: Vec<DocumentDto>,
}
