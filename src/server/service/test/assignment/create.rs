use super::*;

/// Tests creating an assignment with existing assignees.
///
/// Expected: Ok(AssignmentDetails) listing both students
#[tokio::test]
async fn creates_with_resolved_assignees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let service = AssignmentService::new(db);
    let created = service
        .create(create_param(club.id, vec![first.id, second.id]))
        .await?;

    assert_eq!(created.assignees.len(), 2);
    assert!(created.documents.is_empty());

    let stored = service.get_by_id(created.assignment.id).await?.unwrap();
    let ids: Vec<i32> = stored.assignees.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests creating an assignment naming a student that does not exist.
///
/// Verifies the failure happens before anything is persisted.
///
/// Expected: Err(AppError::NotFound), no assignment or assignee rows
#[tokio::test]
async fn unknown_assignee_persists_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = factory::create_student(db).await?;

    let result = AssignmentService::new(db)
        .create(create_param(club.id, vec![student.id, 9999]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.contains("9999")));
    assert_eq!(entity::prelude::Assignment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AssignmentAssignee::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating an assignment for a club that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_club_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssignmentService::new(db)
        .create(create_param(9999, Vec::new()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing the assignments of a student.
///
/// Expected: only the assignment the student is assigned to
#[tokio::test]
async fn lists_student_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    let service = AssignmentService::new(db);
    let mine = service.create(create_param(club.id, vec![student.id])).await?;
    service.create(create_param(club.id, vec![other.id])).await?;

    let assignments = service.get_by_student(student.id).await?;

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].assignment.id, mine.assignment.id);
    assert_eq!(service.get_all().await?.len(), 2);

    Ok(())
}
