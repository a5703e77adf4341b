//! Document creation, reads and deletion.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::DocumentRepository,
    error::AppError,
    model::document::{CreateDocumentParam, Document},
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unattached document
    pub async fn create(&self, param: CreateDocumentParam) -> Result<Document, AppError> {
        let document = DocumentRepository::new(self.db).create(param).await?;

        tracing::info!("Created document {} ({})", document.name, document.id);

        Ok(document)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Document>, AppError> {
        Ok(DocumentRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(DocumentRepository::new(self.db).get_all().await?)
    }

    /// Deletes a document
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Document does not exist
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let removed = DocumentRepository::new(self.db).delete(id).await?;

        if removed == 0 {
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        tracing::info!("Deleted document {}", id);

        Ok(())
    }
}
