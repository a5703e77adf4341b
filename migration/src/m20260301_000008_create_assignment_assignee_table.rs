use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_student_table::Student;
use super::m20260301_000007_create_assignment_table::Assignment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssignmentAssignee::Table)
                    .if_not_exists()
                    .col(integer(AssignmentAssignee::AssignmentId))
                    .col(integer(AssignmentAssignee::StudentId))
                    .primary_key(
                        Index::create()
                            .col(AssignmentAssignee::AssignmentId)
                            .col(AssignmentAssignee::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_assignee_assignment_id")
                            .from(AssignmentAssignee::Table, AssignmentAssignee::AssignmentId)
                            .to(Assignment::Table, Assignment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_assignee_student_id")
                            .from(AssignmentAssignee::Table, AssignmentAssignee::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssignmentAssignee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AssignmentAssignee {
    Table,
    AssignmentId,
    StudentId,
}
