//! Application layer: input validation and service orchestration.
//!
//! - [`dto`] - Loosely typed input validated before it reaches the domain
//! - [`services::blog_service::BlogService`] - Blog CRUD with ownership checks
//! - [`services::user_service::UserService`] - User registration
//! - [`services::stats_service::StatsService`] - List statistics over stored blogs

pub mod dto;
pub mod services;
