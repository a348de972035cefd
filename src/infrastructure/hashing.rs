//! bcrypt password hashing.

use serde_json::json;

use crate::domain::password::PasswordHasher;
use crate::error::AppError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Hashes passwords with bcrypt at a fixed work factor.
///
/// Output is the modular crypt string (`$2b$<cost>$<salt><digest>`), so the
/// salt and cost travel with the hash and `verify` needs nothing else.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `cost` is outside bcrypt's 4..=31.
    pub fn new(cost: u32) -> Result<Self, AppError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AppError::bad_request(
                "bcrypt cost out of range",
                json!({ "cost": cost, "min": MIN_COST, "max": MAX_COST }),
            ));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            AppError::internal(
                "Password hashing failed",
                json!({ "reason": e.to_string() }),
            )
        })
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
