use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateDocumentDto {
    pub name: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub assignment_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
