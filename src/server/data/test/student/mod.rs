use crate::server::{data::student::StudentRepository, model::student::UpdateStudentProfileParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_ids;
