use super::*;

/// Tests attaching documents to an assignment.
///
/// Verifies attached documents are listed for the assignment and untouched
/// documents are not.
///
/// Expected: Ok(2), assignment lists exactly the two documents
#[tokio::test]
async fn attaches_listed_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let assignment = factory::create_assignment(db, club.id).await?;
    let d1 = factory::create_document(db).await?;
    let d2 = factory::create_document(db).await?;
    let untouched = factory::create_document(db).await?;

    let repo = DocumentRepository::new(db);
    let updated = repo.attach(&[d1.id, d2.id], assignment.id).await?;

    assert_eq!(updated, 2);
    let ids: Vec<i32> = repo
        .get_by_assignment(assignment.id)
        .await?
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![d1.id, d2.id]);
    assert_eq!(repo.find_by_id(untouched.id).await?.unwrap().assignment_id, None);

    Ok(())
}

/// Tests that attaching moves a document off its previous assignment.
///
/// Expected: the document only appears under the new assignment
#[tokio::test]
async fn moves_document_between_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let a = factory::create_assignment(db, club.id).await?;
    let b = factory::create_assignment(db, club.id).await?;
    let document = factory::document::create_document_for(db, Some(a.id)).await?;

    let repo = DocumentRepository::new(db);
    repo.attach(&[document.id], b.id).await?;

    assert!(repo.get_by_assignment(a.id).await?.is_empty());
    assert_eq!(repo.get_by_assignment(b.id).await?.len(), 1);

    Ok(())
}
