use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the user with the given role and
/// returns it with a generated id.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Advisor,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::Advisor);

    Ok(())
}

/// Tests that duplicate names are rejected by the database.
///
/// Verifies the unique index on name backs up the service-level check.
///
/// Expected: Err on second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: Role::Student,
    };
    repo.create(param.clone()).await?;

    let result = repo
        .create(CreateUserParam {
            email: "other@example.com".to_string(),
            ..param
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
