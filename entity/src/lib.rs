//! SeaORM entity models for the club hub database.
//!
//! Each module mirrors one table created by the `migration` crate. Role-specific
//! records (`student`, `advisor`, `admin`) share their primary key with `user`.

pub mod prelude;

pub mod admin;
pub mod advisor;
pub mod assignment;
pub mod assignment_assignee;
pub mod club;
pub mod club_role;
pub mod document;
pub mod student;
pub mod user;
