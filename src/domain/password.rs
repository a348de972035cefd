//! Password hashing seam used during registration.

use crate::error::AppError;

/// Turns plaintext passwords into storable hashes and checks them later.
///
/// # Implementations
///
/// - [`crate::infrastructure::hashing::BcryptPasswordHasher`]
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hash cannot be computed.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    fn verify(&self, password: &str, hash: &str) -> bool;
}
