//! Blog entity, the post record everything else revolves around.

use serde::Serialize;

/// Upper bound on a single blog's likes.
///
/// Keeps every like sum over an in-memory list well inside `u64`.
pub const MAX_LIKES: u64 = u32::MAX as u64;

/// A stored blog post.
///
/// `user_id` is the owning user's id when the blog was created by a
/// registered user. List statistics only ever look at `title`, `author`
/// and `likes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub user_id: Option<i64>,
}

impl Blog {
    /// Creates a new Blog instance.
    pub fn new(
        id: i64,
        title: String,
        author: String,
        url: String,
        likes: u64,
        user_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            user_id,
        }
    }

    /// Returns true if `user_id` is the blog's creator.
    ///
    /// Blogs without an owner are owned by nobody.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }

    /// Replaces the editable fields with the patch contents.
    pub fn apply(&mut self, patch: BlogPatch) {
        self.title = patch.title;
        self.author = patch.author;
        self.url = patch.url;
        self.likes = patch.likes;
    }
}

/// Input data for creating a new blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub user_id: Option<i64>,
}

/// Full replacement of a blog's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}
