use super::*;

/// Tests registering a student.
///
/// Verifies that the user and student rows share an id, the password is stored
/// hashed and the student starts with a zero score.
///
/// Expected: Ok((User, Profile::Student))
#[tokio::test]
async fn registers_student_with_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let (user, profile) = service
        .register(
            Role::Student,
            RegisterParam {
                photo: Some("me.png".to_string()),
                ..param("alice", "alice@example.com")
            },
        )
        .await?;

    assert_eq!(user.role, Role::Student);
    assert_ne!(user.password_hash, "secret1");
    match profile {
        Profile::Student(student) => {
            assert_eq!(student.id, user.id);
            assert_eq!(student.ge250, 0);
            assert_eq!(student.profile_photo.as_deref(), Some("me.png"));
        }
        other => panic!("expected student profile, got {:?}", other),
    }

    Ok(())
}

/// Tests registering advisors and admins.
///
/// Expected: the matching profile variant for each role
#[tokio::test]
async fn registers_advisor_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    assert!(!service.admin_exists().await?);

    let (_, advisor) = service
        .register(Role::Advisor, param("advisor", "advisor@example.com"))
        .await?;
    let (_, admin) = service
        .register(Role::Admin, param("admin", "admin@example.com"))
        .await?;

    assert!(matches!(advisor, Profile::Advisor(_)));
    assert!(matches!(admin, Profile::Admin(_)));
    assert!(service.admin_exists().await?);

    Ok(())
}

/// Tests registering a second user with a taken name.
///
/// Verifies the conflict is reported and no extra rows are written.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .register(Role::Student, param("alice", "alice@example.com"))
        .await?;

    let result = service
        .register(Role::Student, param("alice", "other@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("Username")));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests registering a second user with a taken email.
///
/// Expected: Err(AppError::Conflict) mentioning the email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .register(Role::Student, param("alice", "alice@example.com"))
        .await?;

    let result = service
        .register(Role::Advisor, param("bobby", "alice@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("Email")));
    assert_eq!(entity::prelude::Advisor::find().count(db).await?, 0);

    Ok(())
}

/// Tests two simultaneous registrations for the same name.
///
/// Both requests may pass the up-front name check before either inserts; the loser
/// must still be reported as a conflict rather than a database error.
///
/// Expected: one Ok, one Err(AppError::Conflict) naming the username, one user row
#[tokio::test]
async fn concurrent_duplicate_name_is_a_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let (first, second) = tokio::join!(
        service.register(Role::Student, param("alice", "alice@example.com")),
        service.register(Role::Student, param("alice", "other@example.com")),
    );

    let (ok, err) = match (first, second) {
        (Ok(ok), Err(err)) | (Err(err), Ok(ok)) => (ok, err),
        (first, second) => panic!("expected one success, got {:?} and {:?}", first, second),
    };

    assert_eq!(ok.0.name, "alice");
    assert!(matches!(err, AppError::Conflict(msg) if msg == "Error: Username is already taken!"));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests two simultaneous registrations for the same email.
///
/// Expected: the losing request reports the email conflict
#[tokio::test]
async fn concurrent_duplicate_email_is_a_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let (first, second) = tokio::join!(
        service.register(Role::Student, param("alice", "shared@example.com")),
        service.register(Role::Advisor, param("bobby", "shared@example.com")),
    );

    let err = match (first, second) {
        (Ok(_), Err(err)) | (Err(err), Ok(_)) => err,
        (first, second) => panic!("expected one success, got {:?} and {:?}", first, second),
    };

    assert!(matches!(err, AppError::Conflict(msg) if msg == "Error: Email is already in use!"));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
