use crate::server::{
    data::{club_role::ClubRoleRepository, user::UserRepository},
    error::AppError,
    model::student::{DeleteStudentOutcome, UpdateStudentProfileParam},
    service::student::StudentService,
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update_profile;
