//! Database repository layer for all domain entities.
//!
//! This module contains one repository struct per entity handling its CRUD operations.
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! the data layer separate from business logic. Every repository borrows a generic
//! `ConnectionTrait` so services can run several repositories on one transaction.

pub mod advisor;
pub mod assignment;
pub mod club;
pub mod club_role;
pub mod document;
pub mod student;
pub mod user;

#[cfg(test)]
mod test;
