//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence seam: services depend on them, and
//! `crate::infrastructure::persistence` provides in-memory implementations.
//! Mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`BlogRepository`] - Blog CRUD operations
//! - [`UserRepository`] - User registration and lookup

pub mod blog_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
