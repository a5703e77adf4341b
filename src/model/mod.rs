//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod assignment;
pub mod auth;
pub mod club;
pub mod document;
pub mod student;
