use super::*;

/// Tests removing a student from every assignee set.
///
/// Verifies other students stay assigned.
///
/// Expected: Ok(2), the other student remains on the first assignment
#[tokio::test]
async fn removes_every_link_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    let first = factory::assignment::AssignmentFactory::new(db, club.id)
        .assignees(vec![student.id, other.id])
        .build()
        .await?;
    let second = factory::assignment::AssignmentFactory::new(db, club.id)
        .assignees(vec![student.id])
        .build()
        .await?;

    let repo = AssignmentRepository::new(db);
    let removed = repo.remove_student_from_all(student.id).await?;

    assert_eq!(removed, 2);
    let remaining: Vec<i32> = repo
        .get_assignees(first.id)
        .await?
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(remaining, vec![other.id]);
    assert!(repo.get_assignees(second.id).await?.is_empty());

    Ok(())
}
