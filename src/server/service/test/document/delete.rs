use super::*;

/// Tests creating and then deleting a document.
///
/// Expected: Ok(()), the document is gone
#[tokio::test]
async fn deletes_existing_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DocumentService::new(db);
    let document = service
        .create(CreateDocumentParam {
            name: "notes.txt".to_string(),
            content: "hello".to_string(),
        })
        .await?;

    service.delete(document.id).await?;

    assert!(service.get_by_id(document.id).await?.is_none());

    Ok(())
}

/// Tests deleting an attached document.
///
/// Expected: Ok(()), the assignment simply has one document fewer
#[tokio::test]
async fn deletes_attached_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let assignment = factory::create_assignment(db, club.id).await?;
    let document = factory::document::create_document_for(db, Some(assignment.id)).await?;

    let service = DocumentService::new(db);
    service.delete(document.id).await?;

    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a document that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_document_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DocumentService::new(db).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
