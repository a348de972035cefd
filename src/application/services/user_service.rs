//! User registration service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::application::dto::RegisterUser;
use crate::domain::entities::{NewUser, User};
use crate::domain::password::PasswordHasher;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Minimum lengths enforced at registration.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationPolicy {
    pub username_min_length: usize,
    pub password_min_length: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            username_min_length: 3,
            password_min_length: 3,
        }
    }
}

/// Service for registering and listing users.
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
    policy: RegistrationPolicy,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>, policy: RegistrationPolicy) -> Self {
        Self {
            repository,
            hasher,
            policy,
        }
    }

    /// Registers a new user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the password is missing or either
    /// the username or the password is too short.
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub async fn register(&self, request: RegisterUser) -> Result<User, AppError> {
        let password = self.validate(&request)?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Username must be unique",
                json!({ "username": request.username }),
            ));
        }

        let new_user = NewUser {
            password_hash: self.hasher.hash(password)?,
            username: request.username,
            name: request.name,
        };

        let user = self.repository.create(new_user).await?;
        info!(id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    // Lengths come from the policy, so these checks cannot be `validator`
    // attributes. Counted in chars, not bytes.
    fn validate<'a>(&self, request: &'a RegisterUser) -> Result<&'a str, AppError> {
        let Some(password) = request.password.as_deref() else {
            return Err(AppError::bad_request(
                "expected a password",
                json!({ "field": "password" }),
            ));
        };

        let min = self.policy.password_min_length;
        if password.chars().count() < min {
            return Err(AppError::bad_request(
                format!("password has to be at least {min} characters long"),
                json!({ "field": "password", "min": min }),
            ));
        }

        let min = self.policy.username_min_length;
        if request.username.chars().count() < min {
            return Err(AppError::bad_request(
                format!("username has to be at least {min} characters long"),
                json!({ "field": "username", "min": min }),
            ));
        }

        Ok(password)
    }
}
