//! Module for event management API endpoints.
//!
//! Listing and reading are open to any authenticated user; changes are
//! checked against the event's owner in `EventService`.

pub mod handlers;
pub mod routes;
