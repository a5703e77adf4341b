use super::*;

/// Tests deleting an assignment with assignees and documents.
///
/// Verifies documents survive but are detached, and assignee links are removed.
///
/// Expected: Ok(()), document unattached, no assignee rows
#[tokio::test]
async fn detaches_documents_and_removes_assignees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = factory::create_student(db).await?;
    let assignment = factory::assignment::AssignmentFactory::new(db, club.id)
        .assignees(vec![student.id])
        .build()
        .await?;
    let document = factory::document::create_document_for(db, Some(assignment.id)).await?;

    let service = AssignmentService::new(db);
    service.delete(assignment.id).await?;

    assert!(service.get_by_id(assignment.id).await?.is_none());
    let stored = DocumentRepository::new(db).find_by_id(document.id).await?.unwrap();
    assert_eq!(stored.assignment_id, None);
    assert_eq!(entity::prelude::AssignmentAssignee::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an assignment that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_assignment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssignmentService::new(db).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
