use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Role},
};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
mod exists;
mod find_by_name;
mod update_name;
