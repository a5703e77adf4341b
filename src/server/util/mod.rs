//! Small helpers shared by the domain model and services.

pub mod parse;
pub mod validate;
