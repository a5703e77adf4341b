//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts the request DTO into a
//! validated parameter type, calls a service, and converts the result back to a DTO.

pub mod assignment;
pub mod auth;
pub mod club;
pub mod document;
pub mod student;
