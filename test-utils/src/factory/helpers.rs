//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{club, club_role, student};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student who is a member of `club_count` freshly created clubs.
///
/// # Returns
/// - `Ok((student, clubs))` - The student and the clubs it joined, in creation order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student_in_clubs(
    db: &DatabaseConnection,
    club_count: usize,
) -> Result<(entity::student::Model, Vec<entity::club::Model>), DbErr> {
    let student = student::create_student(db).await?;

    let mut clubs = Vec::with_capacity(club_count);
    for _ in 0..club_count {
        let club = club::create_club(db).await?;
        club_role::create_membership(db, student.id, club.id).await?;
        clubs.push(club);
    }

    Ok((student, clubs))
}
