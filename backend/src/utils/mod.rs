//! Collection of general utility functions.
//!
//! Password hashing, token handling and custom field validators that do not
//! belong to a single domain module.

pub mod hash;
pub mod jwt;
pub mod validators;
