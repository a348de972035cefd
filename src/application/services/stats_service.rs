//! Blog list statistics service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::list_helper::{
    self, AuthorBlogCount, AuthorLikes, BlogSummary, FavoriteBlog,
};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Computes list statistics over every stored blog.
///
/// Each call reads a fresh snapshot from the repository and hands it to
/// [`list_helper`]; nothing is cached between calls.
pub struct StatsService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> StatsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn total_likes(&self) -> Result<u64, AppError> {
        let blogs = self.repository.list().await?;
        Ok(list_helper::total_likes(&blogs))
    }

    /// Returns `None` when there are no blogs.
    pub async fn favorite_blog(&self) -> Result<Option<FavoriteBlog>, AppError> {
        let blogs = self.repository.list().await?;
        Ok(list_helper::favorite_blog(&blogs))
    }

    /// Returns `None` when there are no blogs.
    pub async fn most_blogs(&self) -> Result<Option<AuthorBlogCount>, AppError> {
        let blogs = self.repository.list().await?;
        Ok(list_helper::most_blogs(&blogs))
    }

    /// Returns `None` when there are no blogs.
    pub async fn most_likes(&self) -> Result<Option<AuthorLikes>, AppError> {
        let blogs = self.repository.list().await?;
        Ok(list_helper::most_likes(&blogs))
    }

    /// All statistics computed over one snapshot.
    pub async fn summary(&self) -> Result<BlogSummary, AppError> {
        let blogs = self.repository.list().await?;
        debug!(count = blogs.len(), "Summarizing blogs");
        Ok(list_helper::summarize(&blogs))
    }
}
