use super::*;

/// Tests resolving a set of student ids.
///
/// Verifies that existing ids are returned in id order and unknown ids are skipped.
///
/// Expected: Ok(Vec) containing only the existing students
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_ids(&[second.id, 9999, first.id]).await?;

    let ids: Vec<i32> = found.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests resolving an empty id list.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_input_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_ids(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
