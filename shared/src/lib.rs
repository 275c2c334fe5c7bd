//! Shared types for the ForCreators client
//!
//! Wire models and request/response DTOs used across the API gateway,
//! the session controller, and tests.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

/// Default API base origin used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://forcreators.vip";
