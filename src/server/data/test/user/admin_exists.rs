use super::*;

/// Tests detecting when an admin account exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when only non-admin users exist.
///
/// Verifies that students and advisors do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .role(UserRole::Advisor)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
