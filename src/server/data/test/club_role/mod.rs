use crate::server::{data::club_role::ClubRoleRepository, model::club::MemberRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
