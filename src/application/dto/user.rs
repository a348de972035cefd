//! Boundary type for user registration.

use serde::Deserialize;

/// Registration request.
///
/// `password` is optional here so that a missing password can be reported
/// with its own message instead of a generic deserialization error.
///
/// Unlike [`super::BlogInput`] this type does not derive `Validate`: the
/// minimum lengths come from [`crate::config::Config`] at runtime, while
/// `validator` attributes take them at compile time. `UserService` checks
/// them against its `RegistrationPolicy` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: Option<String>,
}
