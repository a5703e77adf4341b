use sea_orm::SqlErr;

use super::*;

/// Tests adding a student to a club.
///
/// Expected: Ok(Membership) that can be found again
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let club = factory::create_club(db).await?;

    let repo = ClubRoleRepository::new(db);
    let membership = repo
        .create(student.id, club.id, MemberRole::Member)
        .await?;

    assert_eq!(membership.student_id, student.id);
    assert_eq!(membership.club_id, club.id);
    assert_eq!(membership.role, MemberRole::Member);
    assert_eq!(repo.find(student.id, club.id).await?, Some(membership));

    Ok(())
}

/// Tests that a student cannot join the same club twice.
///
/// Verifies the unique (student, club) index.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let club = factory::create_club(db).await?;

    let repo = ClubRoleRepository::new(db);
    repo.create(student.id, club.id, MemberRole::Member).await?;
    let result = repo.create(student.id, club.id, MemberRole::President).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.get_by_student(student.id).await?.len(), 1);

    Ok(())
}
