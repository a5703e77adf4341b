use super::*;

/// Tests the name and email existence checks.
///
/// Verifies both checks see an existing user and ignore unknown values.
///
/// Expected: true for taken values, false otherwise
#[tokio::test]
async fn detects_taken_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("carol")
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_name("carol").await?);
    assert!(!repo.exists_by_name("dave").await?);
    assert!(repo.exists_by_email("carol@example.com").await?);
    assert!(!repo.exists_by_email("dave@example.com").await?);

    Ok(())
}

/// Tests that a user keeping their own name is not treated as a collision.
///
/// Expected: false for the owner, true for anyone else
#[tokio::test]
async fn name_taken_by_other_ignores_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .name("erin")
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.name_taken_by_other("erin", owner.id).await?);
    assert!(repo.name_taken_by_other("erin", other.id).await?);

    Ok(())
}
