//! Configuration loaded from environment variables.
//!
//! ```bash
//! export BLOGLIST_DATA_FILE="blogs.json"
//! export LOG_FORMAT="json"
//! export PASSWORD_MIN_LENGTH="8"
//! ```
//!
//! ## Optional Variables
//!
//! - `BLOGLIST_DATA_FILE` - JSON file of blog records (default: `blogs.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PASSWORD_MIN_LENGTH` - Minimum password length at registration (default: 3)
//! - `USERNAME_MIN_LENGTH` - Minimum username length at registration (default: 3)
//! - `BCRYPT_COST` - bcrypt work factor for password hashes (default: 10)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::application::services::RegistrationPolicy;
use crate::infrastructure::hashing::{BcryptPasswordHasher, DEFAULT_COST};

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
    pub password_min_length: usize,
    pub username_min_length: usize,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; [`Config::validate`]
    /// catches values that parse but are out of range.
    pub fn from_env() -> Result<Self> {
        let data_file = env::var("BLOGLIST_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("blogs.json"));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let password_min_length = env::var("PASSWORD_MIN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let username_min_length = env::var("USERNAME_MIN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COST);

        Ok(Self {
            data_file,
            log_level,
            log_format,
            password_min_length,
            username_min_length,
            bcrypt_cost,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `password_min_length` is outside 1..=128
    /// - `username_min_length` is outside 1..=64
    /// - `bcrypt_cost` is outside 4..=31
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(1..=128).contains(&self.password_min_length) {
            anyhow::bail!(
                "PASSWORD_MIN_LENGTH must be between 1 and 128, got {}",
                self.password_min_length
            );
        }

        if !(1..=64).contains(&self.username_min_length) {
            anyhow::bail!(
                "USERNAME_MIN_LENGTH must be between 1 and 64, got {}",
                self.username_min_length
            );
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            anyhow::bail!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                self.bcrypt_cost
            );
        }

        Ok(())
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy {
            username_min_length: self.username_min_length,
            password_min_length: self.password_min_length,
        }
    }

    pub fn password_hasher(&self) -> Result<BcryptPasswordHasher> {
        Ok(BcryptPasswordHasher::new(self.bcrypt_cost)?)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Password min length: {}", self.password_min_length);
        tracing::info!("  Username min length: {}", self.username_min_length);
        tracing::info!("  bcrypt cost: {}", self.bcrypt_cost);
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be loaded already (via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            data_file: PathBuf::from("blogs.json"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            password_min_length: 3,
            username_min_length: 3,
            bcrypt_cost: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.password_min_length = 0;
        assert!(config.validate().is_err());

        config.password_min_length = 3;
        config.username_min_length = 65;
        assert!(config.validate().is_err());

        config.username_min_length = 3;
        config.bcrypt_cost = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_registration_policy() {
        let mut config = config();
        config.password_min_length = 8;

        let policy = config.registration_policy();

        assert_eq!(policy.password_min_length, 8);
        assert_eq!(policy.username_min_length, 3);
    }

    #[test]
    fn test_password_hasher_uses_configured_cost() {
        let mut config = config();
        config.bcrypt_cost = 4;
        assert_eq!(config.password_hasher().unwrap().cost(), 4);

        config.bcrypt_cost = 40;
        assert!(config.password_hasher().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("BLOGLIST_DATA_FILE");
            env::remove_var("LOG_FORMAT");
            env::remove_var("PASSWORD_MIN_LENGTH");
            env::remove_var("USERNAME_MIN_LENGTH");
            env::remove_var("BCRYPT_COST");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_file, PathBuf::from("blogs.json"));
        assert_eq!(config.log_format, "text");
        assert_eq!(config.password_min_length, 3);
        assert_eq!(config.username_min_length, 3);
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BLOGLIST_DATA_FILE", "/tmp/other.json");
            env::set_var("PASSWORD_MIN_LENGTH", "10");
            env::set_var("USERNAME_MIN_LENGTH", "not-a-number");
            env::set_var("BCRYPT_COST", "12");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.password_min_length, 10);
        assert_eq!(config.username_min_length, 3);
        assert_eq!(config.bcrypt_cost, 12);

        // Cleanup
        unsafe {
            env::remove_var("BLOGLIST_DATA_FILE");
            env::remove_var("PASSWORD_MIN_LENGTH");
            env::remove_var("USERNAME_MIN_LENGTH");
            env::remove_var("BCRYPT_COST");
        }
    }
}
