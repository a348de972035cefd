//! In-memory repository implementations.

mod memory_blog_repository;
mod memory_user_repository;

pub use memory_blog_repository::MemoryBlogRepository;
pub use memory_user_repository::MemoryUserRepository;
