use super::*;

/// Tests finding an existing user by login name.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_name("bob").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, Role::Student);

    Ok(())
}

/// Tests looking up a name nobody uses.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_name("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
