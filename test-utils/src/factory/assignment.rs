//! Assignment factory for creating test assignments and their assignee links.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    name: String,
    description: String,
    due_date: NaiveDate,
    assignees: Vec<i32>,
}

impl<'a> AssignmentFactory<'a> {
    /// Creates a new AssignmentFactory for the given club.
    ///
    /// Defaults:
    /// - name: `"Assignment {id}"`
    /// - description: empty
    /// - due_date: 2030-01-01
    /// - assignees: none
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        Self {
            db,
            club_id,
            name: format!("Assignment {}", next_id()),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default(),
            assignees: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Student ids to link as assignees. They must already exist.
    pub fn assignees(mut self, assignees: Vec<i32>) -> Self {
        self.assignees = assignees;
        self
    }

    pub async fn build(self) -> Result<entity::assignment::Model, DbErr> {
        let assignment = entity::assignment::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            due_date: ActiveValue::Set(self.due_date),
            club_id: ActiveValue::Set(self.club_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for student_id in self.assignees {
            entity::assignment_assignee::ActiveModel {
                assignment_id: ActiveValue::Set(assignment.id),
                student_id: ActiveValue::Set(student_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(assignment)
    }
}

/// Creates an assignment in the given club with no assignees.
pub async fn create_assignment(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::assignment::Model, DbErr> {
    AssignmentFactory::new(db, club_id).build().await
}
