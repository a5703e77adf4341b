use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::Id))
                    .col(string(Assignment::Name))
                    .col(text(Assignment::Description))
                    .col(date(Assignment::DueDate))
                    .col(integer(Assignment::ClubId))
                    .col(timestamp_with_time_zone(Assignment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_club_id")
                            .from(Assignment::Table, Assignment::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    Name,
    Description,
    DueDate,
    ClubId,
    CreatedAt,
}
