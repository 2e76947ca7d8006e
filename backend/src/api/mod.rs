//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the event, registration
//! and user domains, excluding signup and login which live in `auth`.

pub mod common;
pub mod event;
pub mod registration;
pub mod user;
