//! Assignment data repository.
//!
//! Covers the assignment rows and their `assignment_assignee` links. Multi-step writes
//! such as `create` and `delete` expect the caller to pass a transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    assignment::{Assignment, CreateAssignmentParam},
    student::Student,
};

pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an assignment and one assignee link per student id.
    ///
    /// # Arguments
    /// - `param` - Validated assignment fields; `assignee_ids` must be distinct and exist
    ///
    /// # Returns
    /// - `Ok(Assignment)` - The created assignment
    /// - `Err(DbErr)` - Database error during any insert
    pub async fn create(&self, param: CreateAssignmentParam) -> Result<Assignment, DbErr> {
        let assignment = entity::assignment::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            due_date: ActiveValue::Set(param.due_date),
            club_id: ActiveValue::Set(param.club_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for student_id in param.assignee_ids {
            entity::prelude::AssignmentAssignee::insert(entity::assignment_assignee::ActiveModel {
                assignment_id: ActiveValue::Set(assignment.id),
                student_id: ActiveValue::Set(student_id),
            })
            .exec_with_returning(self.db)
            .await?;
        }

        Ok(Assignment::from_entity(assignment))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Assignment>, DbErr> {
        let entity = entity::prelude::Assignment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Assignment::from_entity))
    }

    /// Gets all assignments ordered by due date, then id.
    pub async fn get_all(&self) -> Result<Vec<Assignment>, DbErr> {
        let entities = entity::prelude::Assignment::find()
            .order_by_asc(entity::assignment::Column::DueDate)
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Assignment::from_entity).collect())
    }

    /// Gets the assignments a student is assigned to.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Assignment>, DbErr> {
        let entities = entity::prelude::Assignment::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::assignment::Relation::AssignmentAssignee.def(),
            )
            .filter(entity::assignment_assignee::Column::StudentId.eq(student_id))
            .order_by_asc(entity::assignment::Column::DueDate)
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Assignment::from_entity).collect())
    }

    /// Resolves the students assigned to an assignment, ordered by id.
    pub async fn get_assignees(&self, assignment_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::student::Relation::AssignmentAssignee.def(),
            )
            .filter(entity::assignment_assignee::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Removes a student from every assignment's assignee set.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignee links removed
    pub async fn remove_student_from_all(&self, student_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AssignmentAssignee::delete_many()
            .filter(entity::assignment_assignee::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an assignment and its assignee links.
    ///
    /// Documents are not touched; detach them first.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignments removed (0 when it did not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::AssignmentAssignee::delete_many()
            .filter(entity::assignment_assignee::Column::AssignmentId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Assignment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
