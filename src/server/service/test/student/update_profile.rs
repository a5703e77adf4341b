use super::*;

fn update(id: i32, name: &str) -> UpdateStudentProfileParam {
    UpdateStudentProfileParam {
        id,
        name: name.to_string(),
        profile_photo: Some("new.png".to_string()),
        ge250: 5,
    }
}

/// Tests renaming a student.
///
/// Verifies the new name is mirrored to the user row.
///
/// Expected: Ok(Student) and the user carries the new name
#[tokio::test]
async fn mirrors_name_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let updated = StudentService::new(db)
        .update_profile(update(student.id, "renamed"))
        .await?;

    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.profile_photo.as_deref(), Some("new.png"));
    assert_eq!(updated.ge250, 5);
    let user = UserRepository::new(db).find_by_id(student.id).await?.unwrap();
    assert_eq!(user.name, "renamed");

    Ok(())
}

/// Tests keeping the same name while editing other fields.
///
/// Expected: Ok(Student), no conflict with the student's own user
#[tokio::test]
async fn keeping_own_name_is_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let updated = StudentService::new(db)
        .update_profile(update(student.id, &student.name))
        .await?;

    assert_eq!(updated.name, student.name);
    assert_eq!(updated.ge250, 5);

    Ok(())
}

/// Tests renaming to another user's name.
///
/// Expected: Err(AppError::Conflict), nothing changed
#[tokio::test]
async fn rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::user::UserFactory::new(db)
        .name("taken")
        .build()
        .await?;

    let result = StudentService::new(db)
        .update_profile(update(student.id, "taken"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = StudentService::new(db).get_by_id(student.id).await?.unwrap();
    assert_eq!(stored.name, student.name);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_student_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
        .update_profile(update(9999, "someone"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
