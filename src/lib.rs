//! # Bloglist
//!
//! Core of a blog list service: blog and user records, validation of
//! incoming records, and statistics over a list of blogs.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the pure
//!   [`domain::list_helper`] statistics
//! - **Application Layer** ([`application`]) - Input validation and services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repositories,
//!   password hashing and JSON record loading
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- stats --file blogs.json
//! cargo run -- stats --file blogs.json --json
//! cargo run -- check --file blogs.json
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::dto::{BlogInput, RegisterUser};
    pub use crate::application::services::{
        BlogService, RegistrationPolicy, StatsService, UserService,
    };
    pub use crate::domain::entities::{Blog, BlogPatch, NewBlog, NewUser, User};
    pub use crate::domain::list_helper::{
        AuthorBlogCount, AuthorLikes, BlogSummary, FavoriteBlog,
    };
    pub use crate::error::AppError;
}
