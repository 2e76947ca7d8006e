//! Module for event registration endpoints.

pub mod handlers;
pub mod routes;
