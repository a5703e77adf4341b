use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000007_create_assignment_table::Assignment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string(Document::Name))
                    .col(text(Document::Content))
                    .col(integer_null(Document::AssignmentId))
                    .col(timestamp_with_time_zone(Document::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_assignment_id")
                            .from(Document::Table, Document::AssignmentId)
                            .to(Assignment::Table, Assignment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    Name,
    Content,
    AssignmentId,
    CreatedAt,
}
