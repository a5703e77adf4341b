use super::*;

/// Tests creating a club without an advisor.
///
/// Expected: Ok(Club) with no advisor
#[tokio::test]
async fn creates_club_without_advisor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    let club = repo
        .create(CreateClubParam {
            name: "Chess".to_string(),
            advisor_id: None,
        })
        .await?;

    assert_eq!(club.name, "Chess");
    assert_eq!(club.advisor_id, None);
    assert!(repo.exists_by_name("Chess").await?);

    Ok(())
}

/// Tests that one advisor cannot be linked to two clubs.
///
/// Verifies the unique index on `advisor_id`.
///
/// Expected: Err on the second club
#[tokio::test]
async fn advisor_can_only_own_one_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let advisor = factory::create_advisor(db).await?;

    let repo = ClubRepository::new(db);
    repo.create(CreateClubParam {
        name: "Chess".to_string(),
        advisor_id: Some(advisor.id),
    })
    .await?;

    let result = repo
        .create(CreateClubParam {
            name: "Robotics".to_string(),
            advisor_id: Some(advisor.id),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
