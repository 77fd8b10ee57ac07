//! Infrastructure Layer
//!
//! PostgreSQL connection management and repository implementations.

pub mod database;
pub mod repositories;
