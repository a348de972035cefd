//! Input types validated before they become domain values.

pub mod blog;
pub mod user;

pub use blog::{BlogInput, parse_blog_records};
pub use user::RegisterUser;
