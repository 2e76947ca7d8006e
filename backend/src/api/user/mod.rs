//! Module for user listing API endpoints.

pub mod handlers;
pub mod routes;
