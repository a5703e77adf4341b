use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub photo_name: Option<String>,
    pub ge250: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentProfileDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub photo_name: Option<String>,
    pub ge250: i32,
}
