//! Infrastructure layer implementing the domain's collaborator traits.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations
//! - [`hashing`] - Password hashing for registration
//! - [`loader`] - Reading blog records from JSON files

pub mod hashing;
pub mod loader;
pub mod persistence;
