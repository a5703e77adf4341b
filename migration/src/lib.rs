pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_student_table;
mod m20260301_000003_create_advisor_table;
mod m20260301_000004_create_admin_table;
mod m20260301_000005_create_club_table;
mod m20260301_000006_create_club_role_table;
mod m20260301_000007_create_assignment_table;
mod m20260301_000008_create_assignment_assignee_table;
mod m20260301_000009_create_document_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_student_table::Migration),
            Box::new(m20260301_000003_create_advisor_table::Migration),
            Box::new(m20260301_000004_create_admin_table::Migration),
            Box::new(m20260301_000005_create_club_table::Migration),
            Box::new(m20260301_000006_create_club_role_table::Migration),
            Box::new(m20260301_000007_create_assignment_table::Migration),
            Box::new(m20260301_000008_create_assignment_assignee_table::Migration),
            Box::new(m20260301_000009_create_document_table::Migration),
        ]
    }
}
