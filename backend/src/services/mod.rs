//! Module for core business logic services.
//!
//! Services sit between the HTTP handlers and the repositories: they enforce
//! ownership rules, hash and check passwords, and issue tokens.

pub mod event_service;
pub mod registration_service;
pub mod user_service;
