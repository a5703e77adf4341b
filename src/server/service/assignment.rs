//! Assignment creation, document linking, deletion and reads.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        assignment::AssignmentRepository, club::ClubRepository, document::DocumentRepository,
        student::StudentRepository,
    },
    error::AppError,
    model::assignment::{
        Assignment, AssignmentDetails, AttachDocumentsParam, CreateAssignmentParam,
    },
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an assignment for a club with its assignees.
    ///
    /// The club and every assignee are resolved before anything is written.
    ///
    /// # Returns
    /// - `Ok(AssignmentDetails)` - The created assignment with resolved assignees
    /// - `Err(AppError::NotFound)` - Club or an assignee does not exist, nothing persisted
    pub async fn create(
        &self,
        param: CreateAssignmentParam,
    ) -> Result<AssignmentDetails, AppError> {
        if ClubRepository::new(self.db)
            .find_by_id(param.club_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Club not found".to_string()));
        }

        let students = StudentRepository::new(self.db)
            .find_by_ids(&param.assignee_ids)
            .await?;

        if students.len() != param.assignee_ids.len() {
            let missing: Vec<String> = param
                .assignee_ids
                .iter()
                .filter(|id| !students.iter().any(|s| s.id == **id))
                .map(|id| id.to_string())
                .collect();

            return Err(AppError::NotFound(format!(
                "Student(s) not found: {}",
                missing.join(", ")
            )));
        }

        let txn = self.db.begin().await?;
        let assignment = AssignmentRepository::new(&txn).create(param).await?;
        txn.commit().await?;

        tracing::info!(
            "Created assignment {} ({}) with {} assignees",
            assignment.name,
            assignment.id,
            students.len()
        );

        Ok(AssignmentDetails {
            assignment,
            assignees: students,
            documents: Vec::new(),
        })
    }

    /// Makes the requested documents the assignment's document set.
    ///
    /// Documents currently attached but not listed are detached; listed documents
    /// attached elsewhere are moved here.
    ///
    /// # Returns
    /// - `Ok(())` - Documents attached
    /// - `Err(AppError::NotFound)` - Assignment or a document does not exist, nothing changed
    pub async fn attach_documents(&self, param: AttachDocumentsParam) -> Result<(), AppError> {
        if AssignmentRepository::new(self.db)
            .find_by_id(param.assignment_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Assignment not found".to_string()));
        }

        let documents = DocumentRepository::new(self.db)
            .find_by_ids(&param.document_ids)
            .await?;

        if documents.len() != param.document_ids.len() {
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        let txn = self.db.begin().await?;
        let document_repo = DocumentRepository::new(&txn);
        document_repo
            .detach_except(param.assignment_id, &param.document_ids)
            .await?;
        document_repo
            .attach(&param.document_ids, param.assignment_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Attached {} documents to assignment {}",
            param.document_ids.len(),
            param.assignment_id
        );

        Ok(())
    }

    /// Deletes an assignment, detaching its documents and removing its assignees.
    ///
    /// # Returns
    /// - `Ok(())` - Assignment deleted
    /// - `Err(AppError::NotFound)` - Assignment does not exist
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if AssignmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Assignment not found".to_string()));
        }

        let txn = self.db.begin().await?;
        DocumentRepository::new(&txn).detach_except(id, &[]).await?;
        AssignmentRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted assignment {}", id);

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AssignmentDetails>, AppError> {
        let Some(assignment) = AssignmentRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(load_details(self.db, assignment).await?))
    }

    pub async fn get_all(&self) -> Result<Vec<AssignmentDetails>, AppError> {
        let assignments = AssignmentRepository::new(self.db).get_all().await?;

        let mut details = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            details.push(load_details(self.db, assignment).await?);
        }

        Ok(details)
    }

    /// Gets the assignments a student is assigned to.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<AssignmentDetails>, AppError> {
        let assignments = AssignmentRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        let mut details = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            details.push(load_details(self.db, assignment).await?);
        }

        Ok(details)
    }
}

/// Resolves the assignees and documents of an assignment.
async fn load_details<C: ConnectionTrait>(
    db: &C,
    assignment: Assignment,
) -> Result<AssignmentDetails, AppError> {
    let assignees = AssignmentRepository::new(db)
        .get_assignees(assignment.id)
        .await?;
    let documents = DocumentRepository::new(db)
        .get_by_assignment(assignment.id)
        .await?;

    Ok(AssignmentDetails {
        assignment,
        assignees,
        documents,
    })
}
