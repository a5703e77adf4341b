use super::*;

/// Tests a student calling an admin-only operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn student_is_not_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let student = factory::create_student(db).await?;
    let headers = headers_for(db, &tokens, student.id).await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the staff permission for each role.
///
/// Expected: advisor and admin pass, student is denied
#[tokio::test]
async fn staff_means_advisor_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let advisor = factory::create_advisor(db).await?;
    let admin = factory::create_admin(db).await?;
    let student = factory::create_student(db).await?;

    for id in [advisor.id, admin.id] {
        let headers = headers_for(db, &tokens, id).await?;
        let result = AuthGuard::new(db, &tokens, &headers)
            .require(&[Permission::Staff])
            .await;
        assert!(result.is_ok());
    }

    let headers = headers_for(db, &tokens, student.id).await?;
    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Staff])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests acting on one's own record versus someone else's.
///
/// Expected: self and admin pass, another student is denied
#[tokio::test]
async fn self_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let owner = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    let admin = factory::create_admin(db).await?;

    let owner_headers = headers_for(db, &tokens, owner.id).await?;
    let other_headers = headers_for(db, &tokens, other.id).await?;
    let admin_headers = headers_for(db, &tokens, admin.id).await?;
    let permission = [Permission::SelfOrAdmin(owner.id)];

    assert!(AuthGuard::new(db, &tokens, &owner_headers)
        .require(&permission)
        .await
        .is_ok());
    assert!(AuthGuard::new(db, &tokens, &admin_headers)
        .require(&permission)
        .await
        .is_ok());
    assert!(matches!(
        AuthGuard::new(db, &tokens, &other_headers)
            .require(&permission)
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that advisors pass the self-or-staff check for any student.
///
/// Expected: Ok(User)
#[tokio::test]
async fn self_or_staff_admits_advisor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let student = factory::create_student(db).await?;
    let advisor = factory::create_advisor(db).await?;
    let headers = headers_for(db, &tokens, advisor.id).await?;

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::SelfOrStaff(student.id)])
        .await?;

    assert_eq!(user.id, advisor.id);

    Ok(())
}
