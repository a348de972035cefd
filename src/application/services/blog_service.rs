//! Blog management service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::BlogInput;
use crate::domain::entities::{Blog, BlogPatch, MAX_LIKES};
use crate::domain::repositories::{BlogRepository, UserRepository};
use crate::error::AppError;

/// Service for creating, editing and deleting blogs.
///
/// Blogs created on behalf of a user are linked to that user, and only that
/// user may delete them later.
pub struct BlogService<B: BlogRepository, U: UserRepository> {
    blogs: Arc<B>,
    users: Arc<U>,
}

impl<B: BlogRepository, U: UserRepository> BlogService<B, U> {
    pub fn new(blogs: Arc<B>, users: Arc<U>) -> Self {
        Self { blogs, users }
    }

    /// Creates a blog, optionally owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is invalid.
    /// Returns [`AppError::NotFound`] if `user_id` does not exist. The blog is
    /// removed again if linking it to the user fails.
    pub async fn create_blog(
        &self,
        input: BlogInput,
        user_id: Option<i64>,
    ) -> Result<Blog, AppError> {
        input.validate()?;

        if let Some(user_id) = user_id
            && self.users.find_by_id(user_id).await?.is_none()
        {
            return Err(AppError::not_found(
                "User not found",
                json!({ "id": user_id }),
            ));
        }

        let blog = self.blogs.create(input.into_new_blog(user_id)).await?;

        if let Some(user_id) = user_id
            && let Err(e) = self.users.attach_blog(user_id, blog.id).await
        {
            // Roll back so no stored blog names an owner that does not list it.
            warn!(id = blog.id, user_id, error = %e, "Linking blog to user failed");
            self.blogs.delete(blog.id).await?;
            return Err(e);
        }

        info!(id = blog.id, title = %blog.title, "Blog created");
        Ok(blog)
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.blogs.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    pub async fn get_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.blogs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Replaces a blog's title, author, url and likes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is invalid.
    /// Returns [`AppError::NotFound`] if no blog has this id.
    pub async fn update_blog(&self, id: i64, input: BlogInput) -> Result<Blog, AppError> {
        input.validate()?;
        self.blogs.update(id, input.into_patch()).await
    }

    /// Adds one like to a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Validation`] if the blog already has [`MAX_LIKES`].
    pub async fn like_blog(&self, id: i64) -> Result<Blog, AppError> {
        let blog = self.get_blog(id).await?;

        if blog.likes >= MAX_LIKES {
            return Err(AppError::bad_request(
                "likes is too large",
                json!({ "id": id, "max": MAX_LIKES }),
            ));
        }

        let patch = BlogPatch {
            likes: blog.likes + 1,
            title: blog.title,
            author: blog.author,
            url: blog.url,
        };

        self.blogs.update(id, patch).await
    }

    /// Deletes a blog on behalf of `caller_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Forbidden`] if the caller did not create the blog.
    pub async fn delete_blog(&self, id: i64, caller_id: i64) -> Result<(), AppError> {
        let blog = self.get_blog(id).await?;

        if !blog.is_owned_by(caller_id) {
            warn!(id, caller_id, "Refused to delete blog owned by another user");
            return Err(AppError::forbidden(
                "Only the creator can delete a blog",
                json!({ "id": id }),
            ));
        }

        self.blogs.delete(id).await?;
        self.users.detach_blog(caller_id, id).await?;
        info!(id, "Blog deleted");
        Ok(())
    }
}
