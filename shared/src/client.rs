//! Client-related types shared with the remote API
//!
//! Request/response DTOs for the JSON endpoints. The response bodies of the
//! data endpoints are the full records in [`crate::models`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub main_platform: String,
    pub username: String,
    pub followers: u64,
    pub profiles_count: u32,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of both signup and login: the identifier to load the profile with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdResponse {
    pub user_id: String,
}

// =============================================================================
// Contact API DTOs
// =============================================================================

/// Contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
