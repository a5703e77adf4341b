use super::*;

/// Tests attaching two documents and then moving one to another assignment.
///
/// Verifies that after re-attaching D1 to B, A's documents no longer include D1
/// and B's documents are exactly D1.
///
/// Expected: A == {D1, D2}, then A == {D2} and B == {D1}
#[tokio::test]
async fn reattaching_moves_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let a = factory::create_assignment(db, club.id).await?;
    let b = factory::create_assignment(db, club.id).await?;
    let d1 = factory::create_document(db).await?;
    let d2 = factory::create_document(db).await?;

    let service = AssignmentService::new(db);
    service
        .attach_documents(AttachDocumentsParam {
            assignment_id: a.id,
            document_ids: vec![d1.id, d2.id],
        })
        .await?;

    let documents = DocumentRepository::new(db);
    assert_eq!(documents.find_by_id(d1.id).await?.unwrap().assignment_id, Some(a.id));
    assert_eq!(documents.find_by_id(d2.id).await?.unwrap().assignment_id, Some(a.id));
    let a_docs: Vec<i32> = service
        .get_by_id(a.id)
        .await?
        .unwrap()
        .documents
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(a_docs, vec![d1.id, d2.id]);

    service
        .attach_documents(AttachDocumentsParam {
            assignment_id: b.id,
            document_ids: vec![d1.id],
        })
        .await?;

    let a_docs: Vec<i32> = service
        .get_by_id(a.id)
        .await?
        .unwrap()
        .documents
        .iter()
        .map(|d| d.id)
        .collect();
    let b_docs: Vec<i32> = service
        .get_by_id(b.id)
        .await?
        .unwrap()
        .documents
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(a_docs, vec![d2.id]);
    assert_eq!(b_docs, vec![d1.id]);

    Ok(())
}

/// Tests that attaching replaces the assignment's previous document set.
///
/// Expected: the document left out of the request is detached
#[tokio::test]
async fn replaces_previous_documents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let assignment = factory::create_assignment(db, club.id).await?;
    let old = factory::document::create_document_for(db, Some(assignment.id)).await?;
    let new = factory::create_document(db).await?;

    AssignmentService::new(db)
        .attach_documents(AttachDocumentsParam {
            assignment_id: assignment.id,
            document_ids: vec![new.id],
        })
        .await?;

    let documents = DocumentRepository::new(db);
    assert_eq!(documents.find_by_id(old.id).await?.unwrap().assignment_id, None);
    assert_eq!(
        documents.find_by_id(new.id).await?.unwrap().assignment_id,
        Some(assignment.id)
    );

    Ok(())
}

/// Tests attaching a document id that does not exist.
///
/// Expected: Err(AppError::NotFound), existing links untouched
#[tokio::test]
async fn unknown_document_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let assignment = factory::create_assignment(db, club.id).await?;
    let attached = factory::document::create_document_for(db, Some(assignment.id)).await?;

    let result = AssignmentService::new(db)
        .attach_documents(AttachDocumentsParam {
            assignment_id: assignment.id,
            document_ids: vec![9999],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        DocumentRepository::new(db)
            .find_by_id(attached.id)
            .await?
            .unwrap()
            .assignment_id,
        Some(assignment.id)
    );

    Ok(())
}
