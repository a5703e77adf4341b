use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(integer(Student::Id).primary_key())
                    .col(string(Student::Name))
                    .col(string_null(Student::ProfilePhoto))
                    .col(integer(Student::Ge250).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_user_id")
                            .from(Student::Table, Student::Id)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    Name,
    ProfilePhoto,
    Ge250,
}
