//! Document data repository.
//!
//! `document.assignment_id` is the only link between documents and assignments, so
//! attaching and detaching are plain column updates.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::document::{CreateDocumentParam, Document};

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unattached document.
    pub async fn create(&self, param: CreateDocumentParam) -> Result<Document, DbErr> {
        let entity = entity::document::ActiveModel {
            name: ActiveValue::Set(param.name),
            content: ActiveValue::Set(param.content),
            assignment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Document::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Document>, DbErr> {
        let entity = entity::prelude::Document::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Document::from_entity))
    }

    /// Finds every document whose id is in `ids`, ordered by id.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Document>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Document::find()
            .filter(entity::document::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Document>, DbErr> {
        let entities = entity::prelude::Document::find()
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    /// Gets the documents attached to an assignment, ordered by id.
    pub async fn get_by_assignment(&self, assignment_id: i32) -> Result<Vec<Document>, DbErr> {
        let entities = entity::prelude::Document::find()
            .filter(entity::document::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    /// Points every document in `ids` at `assignment_id`, moving it off any other assignment.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of documents updated
    pub async fn attach(&self, ids: &[i32], assignment_id: i32) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Document::update_many()
            .filter(entity::document::Column::Id.is_in(ids.to_vec()))
            .col_expr(
                entity::document::Column::AssignmentId,
                Expr::value(Some(assignment_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Detaches the assignment's documents whose id is not in `keep`.
    ///
    /// With an empty `keep` every document of the assignment is detached.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of documents detached
    pub async fn detach_except(&self, assignment_id: i32, keep: &[i32]) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Document::update_many()
            .filter(entity::document::Column::AssignmentId.eq(assignment_id));

        if !keep.is_empty() {
            query = query.filter(entity::document::Column::Id.is_not_in(keep.to_vec()));
        }

        let result = query
            .col_expr(
                entity::document::Column::AssignmentId,
                Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the document did not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
