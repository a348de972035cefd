//! Core domain entities.
//!
//! - [`Blog`] - A blog post with its like count
//! - [`User`] - A registered user who can own blogs
//!
//! Creation uses separate `New*` structs; blog edits go through [`BlogPatch`].

pub mod blog;
pub mod user;

pub use blog::{Blog, BlogPatch, MAX_LIKES, NewBlog};
pub use user::{NewUser, User};
