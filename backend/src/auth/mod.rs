//! Authentication module for user accounts and access control.
//!
//! This module provides the public interface for signup and login, plus the
//! middleware that guards every other route with a bearer token.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
