//! Document factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a document, optionally already attached to an assignment.
///
/// # Returns
/// - `Ok(entity::document::Model)` - Created document named `"document{id}.pdf"`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_document_for(
    db: &DatabaseConnection,
    assignment_id: Option<i32>,
) -> Result<entity::document::Model, DbErr> {
    entity::document::ActiveModel {
        name: ActiveValue::Set(format!("document{}.pdf", next_id())),
        content: ActiveValue::Set("content".to_string()),
        assignment_id: ActiveValue::Set(assignment_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an unattached document.
pub async fn create_document(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    create_document_for(db, None).await
}
