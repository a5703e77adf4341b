use crate::server::{
    error::AppError,
    model::user::{Profile, RegisterParam, Role},
    service::user::UserService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod register;

fn param(name: &str, email: &str) -> RegisterParam {
    RegisterParam {
        name: name.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        photo: None,
    }
}
