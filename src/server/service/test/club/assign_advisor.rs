use super::*;

/// Tests linking an advisor to a club.
///
/// Expected: Ok(Club) with the advisor set
#[tokio::test]
async fn links_free_advisor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let advisor = factory::create_advisor(db).await?;
    let club = factory::create_club(db).await?;

    let updated = ClubService::new(db)
        .assign_advisor(AssignAdvisorParam {
            club_id: club.id,
            advisor_id: advisor.id,
        })
        .await?;

    assert_eq!(updated.advisor_id, Some(advisor.id));

    Ok(())
}

/// Tests re-linking an advisor to the club they already manage.
///
/// Expected: Ok(Club), not a conflict
#[tokio::test]
async fn relinking_same_club_is_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let advisor = factory::create_advisor(db).await?;
    let club = factory::club::ClubFactory::new(db)
        .advisor_id(advisor.id)
        .build()
        .await?;

    let result = ClubService::new(db)
        .assign_advisor(AssignAdvisorParam {
            club_id: club.id,
            advisor_id: advisor.id,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests linking an advisor who already manages another club.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_advisor_of_other_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let advisor = factory::create_advisor(db).await?;
    factory::club::ClubFactory::new(db)
        .advisor_id(advisor.id)
        .build()
        .await?;
    let other = factory::create_club(db).await?;

    let result = ClubService::new(db)
        .assign_advisor(AssignAdvisorParam {
            club_id: other.id,
            advisor_id: advisor.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests linking to a club that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let advisor = factory::create_advisor(db).await?;

    let result = ClubService::new(db)
        .assign_advisor(AssignAdvisorParam {
            club_id: 9999,
            advisor_id: advisor.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
