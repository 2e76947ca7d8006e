//! Password hashing helpers built on bcrypt.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password with the given bcrypt cost.
///
/// # Errors
/// Returns `ServiceError::Validation` if the password is shorter than
/// `MIN_PASSWORD_LENGTH` and `ServiceError::InternalError` if hashing fails.
pub fn hash_password(password: &str, cost: u32) -> ServiceResult<String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ServiceError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    hash(password, cost)
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
}

/// Compares a password against a stored hash.
///
/// A malformed hash compares as `false` rather than erroring.
pub fn check_password_hash(password: &str, hashed_password: &str) -> bool {
    match verify(password, hashed_password) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Password verification failed: {}", e);
            false
        }
    }
}
