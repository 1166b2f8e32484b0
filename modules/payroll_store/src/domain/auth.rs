//! Username/password authentication against the `users` table

use super::credentials::{hash_password, verify_password};
use super::repository::{StoreResult, UserRepository};
use crate::contract::{NewUser, StoreError, User};
use std::sync::Arc;

pub struct Authenticator {
    user_repo: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Returns the user when the password matches, `None` otherwise
    pub async fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<User>> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            tracing::warn!(username, "authentication failed: unknown user");
            return Ok(None);
        };

        if verify_password(password, &user.salt, &user.password_hash) {
            tracing::debug!(username, user_id = user.id, "authenticated");
            Ok(Some(user))
        } else {
            tracing::warn!(username, "authentication failed: bad password");
            Ok(None)
        }
    }

    /// Create an account with a freshly salted password hash
    pub async fn register(&self, username: &str, password: &str, role: &str) -> StoreResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::Validation("username is required".to_string()));
        }
        if role.trim().is_empty() {
            return Err(StoreError::Validation("role is required".to_string()));
        }

        let (salt, password_hash) = hash_password(password, None);
        self.user_repo
            .create(&NewUser {
                username: username.to_string(),
                salt,
                password_hash,
                role: role.trim().to_uppercase(),
            })
            .await
    }
}
