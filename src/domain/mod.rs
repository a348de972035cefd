//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Blog and user data structures
//! - [`repositories`] - Data access trait definitions
//! - [`password`] - Password hashing trait used at registration
//! - [`list_helper`] - Pure statistics over a list of blogs
//!
//! The domain layer has no dependencies on infrastructure. Repository traits
//! define contracts implemented by `crate::infrastructure`.

pub mod entities;
pub mod list_helper;
pub mod password;
pub mod repositories;
