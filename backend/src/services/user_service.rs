//! User business logic service.
//!
//! Handles signup, credential checks, login and user listing.

use crate::database::models::User;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::hash::{check_password_hash, hash_password};
use crate::utils::jwt::JwtUtils;
use std::sync::Arc;
use tokio::task;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
    jwt_utils: JwtUtils,
    bcrypt_cost: u32,
}

impl UserService {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `repo` - User storage
    /// * `jwt_utils` - Token issuer used on login
    /// * `bcrypt_cost` - Cost factor for new password hashes
    pub fn new(repo: Arc<dyn UserRepository>, jwt_utils: JwtUtils, bcrypt_cost: u32) -> Self {
        Self {
            repo,
            jwt_utils,
            bcrypt_cost,
        }
    }

    /// Creates a new user and returns its id.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` when the password is shorter than
    /// 8 characters (nothing is stored), `ServiceError::Database` when the
    /// insert fails, including a duplicate email.
    pub async fn create_user(&self, email: &str, password: &str) -> ServiceResult<i64> {
        let password = password.to_string();
        let cost = self.bcrypt_cost;
        let password_hash = task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| {
                ServiceError::internal_error(format!("Password hashing task failed: {}", e))
            })??;

        let id = self.repo.create_user(email, &password_hash).await?;
        tracing::info!("Created user {} ({})", id, email);
        Ok(id)
    }

    /// Checks a password against the stored hash for `email`.
    ///
    /// # Returns
    /// `true` if the password matches, `false` otherwise
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if no user has that email
    pub async fn validate_credentials(&self, email: &str, password: &str) -> ServiceResult<bool> {
        Ok(self.authenticate(email, password).await?.is_some())
    }

    /// Authenticates the user and issues a signed token.
    ///
    /// # Errors
    /// Returns `ServiceError::Unauthorized` on a wrong password and
    /// `ServiceError::NotFound` for an unknown email.
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<String> {
        let user = self
            .authenticate(email, password)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Invalid Credentials"))?;

        self.jwt_utils.generate_token(user.id, &user.email)
    }

    /// Lists every user; passwords are hashes only.
    pub async fn list_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.get_users().await?)
    }

    /// The user if the password matches, `None` on a mismatch.
    async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<Option<User>> {
        let user = self
            .repo
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let matches = task::spawn_blocking(move || check_password_hash(&password, &password_hash))
            .await
            .map_err(|e| {
                ServiceError::internal_error(format!("Password verification task failed: {}", e))
            })?;

        Ok(matches.then_some(user))
    }
}
