use super::*;

/// Tests logging in with correct credentials.
///
/// Verifies the issued token carries the user's identity and role claim.
///
/// Expected: Ok(LoginResult) whose token verifies to ROLE_STUDENT
#[tokio::test]
async fn issues_token_with_role_claims() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (user, _) = UserService::new(db)
        .register(Role::Student, register("alice"))
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(login("alice", "secret1"))
        .await?;

    assert_eq!(result.user.id, user.id);
    assert_eq!(result.club_id, None);

    let claims = tokens.verify(&result.token)?;
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.roles, vec!["ROLE_STUDENT".to_string()]);

    let dto = result.into_dto();
    assert_eq!(dto.token_type, "Bearer");
    assert_eq!(dto.roles, vec!["ROLE_STUDENT".to_string()]);

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    UserService::new(db)
        .register(Role::Student, register("alice"))
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(login("alice", "wrong-password"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as a user that does not exist.
///
/// Verifies the failure is indistinguishable from a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let result = AuthService::new(db, &tokens)
        .login(login("nobody", "secret1"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an advisor's login carries their club id once linked.
///
/// Expected: None before linking, Some(club id) after
#[tokio::test]
async fn advisor_login_includes_club_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (advisor, _) = UserService::new(db)
        .register(Role::Advisor, register("mentor"))
        .await?;
    let club = factory::create_club(db).await?;

    let service = AuthService::new(db, &tokens);
    let before = service.login(login("mentor", "secret1")).await?;
    assert_eq!(before.club_id, None);

    ClubService::new(db)
        .assign_advisor(AssignAdvisorParam {
            club_id: club.id,
            advisor_id: advisor.id,
        })
        .await?;

    let after = service.login(login("mentor", "secret1")).await?;
    assert_eq!(after.club_id, Some(club.id));

    let claims = tokens.verify(&after.token)?;
    assert_eq!(claims.roles, vec!["ROLE_ADVISOR".to_string()]);

    Ok(())
}
