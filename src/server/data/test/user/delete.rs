use super::*;

/// Tests deleting a user.
///
/// Expected: one row affected, then the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let removed = repo.delete(user.id).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_user_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let removed = repo.delete(999).await?;

    assert_eq!(removed, 0);

    Ok(())
}
