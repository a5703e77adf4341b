//! Request guards applied inside handlers.

pub mod auth;
