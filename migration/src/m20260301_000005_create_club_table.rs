use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_advisor_table::Advisor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string_uniq(Club::Name))
                    .col(integer_null(Club::AdvisorId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_advisor_id")
                            .from(Club::Table, Club::AdvisorId)
                            .to(Advisor::Table, Advisor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    AdvisorId,
}
