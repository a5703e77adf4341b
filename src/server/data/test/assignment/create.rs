use super::*;

/// Tests creating an assignment with assignees.
///
/// Verifies that one assignee link is written per student and the assignees
/// resolve back to those students.
///
/// Expected: Ok(Assignment) with two assignees
#[tokio::test]
async fn creates_assignment_with_assignees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let repo = AssignmentRepository::new(db);
    let assignment = repo
        .create(CreateAssignmentParam {
            name: "Essay".to_string(),
            description: "500 words".to_string(),
            due_date: due_date(),
            club_id: club.id,
            assignee_ids: vec![second.id, first.id],
        })
        .await?;

    assert_eq!(assignment.name, "Essay");
    assert_eq!(assignment.due_date, due_date());
    assert_eq!(assignment.club_id, club.id);

    let assignees = repo.get_assignees(assignment.id).await?;
    let ids: Vec<i32> = assignees.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests creating an assignment with nobody assigned.
///
/// Expected: Ok(Assignment) with no assignees
#[tokio::test]
async fn creates_assignment_without_assignees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let repo = AssignmentRepository::new(db);
    let assignment = repo
        .create(CreateAssignmentParam {
            name: "Reading".to_string(),
            description: String::new(),
            due_date: due_date(),
            club_id: club.id,
            assignee_ids: Vec::new(),
        })
        .await?;

    assert!(repo.get_assignees(assignment.id).await?.is_empty());
    assert!(repo.find_by_id(assignment.id).await?.is_some());

    Ok(())
}
