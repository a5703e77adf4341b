//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs and carry already-validated input into the service layer.

pub mod assignment;
pub mod auth;
pub mod club;
pub mod document;
pub mod student;
pub mod user;
