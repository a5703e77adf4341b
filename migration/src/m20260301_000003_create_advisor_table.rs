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
                    .table(Advisor::Table)
                    .if_not_exists()
                    .col(integer(Advisor::Id).primary_key())
                    .col(string(Advisor::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advisor_user_id")
                            .from(Advisor::Table, Advisor::Id)
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
            .drop_table(Table::drop().table(Advisor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Advisor {
    Table,
    Id,
    Name,
}
