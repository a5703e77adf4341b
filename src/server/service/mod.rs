//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They:
//!
//! - **Business Logic**: Enforce uniqueness, membership and linking rules
//! - **Orchestration**: Coordinate several repositories per operation
//! - **Domain Models**: Work with domain models rather than DTOs or entity models
//! - **Transaction Management**: Run multi-step writes inside one transaction

pub mod assignment;
pub mod auth;
pub mod club;
pub mod document;
pub mod student;
pub mod user;

#[cfg(test)]
mod test;
