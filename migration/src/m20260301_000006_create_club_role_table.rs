use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_student_table::Student;
use super::m20260301_000005_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubRole::Table)
                    .if_not_exists()
                    .col(pk_auto(ClubRole::Id))
                    .col(integer(ClubRole::StudentId))
                    .col(integer(ClubRole::ClubId))
                    .col(string_len(ClubRole::Role, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_role_student_id")
                            .from(ClubRole::Table, ClubRole::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_role_club_id")
                            .from(ClubRole::Table, ClubRole::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_club_role_student_club_unique")
                            .col(ClubRole::StudentId)
                            .col(ClubRole::ClubId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubRole {
    Table,
    Id,
    StudentId,
    ClubId,
    Role,
}
