//! Repository trait for registered users.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists every user in registration order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Records that `blog_id` was created by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    async fn attach_blog(&self, user_id: i64, blog_id: i64) -> Result<(), AppError>;

    /// Removes `blog_id` from the user's blogs. Unknown blog ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    async fn detach_blog(&self, user_id: i64, blog_id: i64) -> Result<(), AppError>;
}
