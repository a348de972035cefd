//! Repository trait for blog data access.

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blogs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryBlogRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Stores a new blog and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError>;

    /// Finds a blog by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Blog))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Lists every blog in insertion order.
    async fn list(&self) -> Result<Vec<Blog>, AppError>;

    /// Replaces the editable fields of a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError>;

    /// Deletes a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
