//! Data access layer.
//!
//! One trait per entity describes the storage capabilities services rely on;
//! the `Sql*` types implement them on top of the shared SQLite pool.

pub mod event_repository;
pub mod registration_repository;
pub mod user_repository;

#[cfg(test)]
pub mod memory;
