use super::*;

/// Tests renaming a user.
///
/// Expected: the stored name changes
#[tokio::test]
async fn renames_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_name(user.id, "renamed").await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.name, "renamed");

    Ok(())
}
