//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Role-specific factories create the backing user row so
//! the shared-id invariant between users and their profiles always holds.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let student = factory::create_student(&db).await?;
//!     let club = factory::create_club(&db).await?;
//!     factory::create_membership(&db, student.id, club.id).await?;
//!
//!     // Or in one go
//!     let (student, clubs) = factory::helpers::create_student_in_clubs(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Login accounts
//! - `student` - Student profiles (creates the user)
//! - `advisor` - Advisor and admin profiles (creates the user)
//! - `club` - Clubs
//! - `club_role` - Student memberships in clubs
//! - `assignment` - Assignments with assignee links
//! - `document` - Documents, optionally attached to an assignment
//! - `helpers` - Unique ids and multi-entity setups

pub mod advisor;
pub mod assignment;
pub mod club;
pub mod club_role;
pub mod document;
pub mod helpers;
pub mod student;
pub mod user;

pub use advisor::{create_admin, create_advisor};
pub use assignment::create_assignment;
pub use club::create_club;
pub use club_role::create_membership;
pub use document::create_document;
pub use student::create_student;
pub use user::create_user;
