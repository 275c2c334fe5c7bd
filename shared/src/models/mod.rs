//! Data models
//!
//! Records produced by the remote scoring API. The client never edits them;
//! each one is replaced wholesale on refetch.

pub mod media_kit;
pub mod profile_tips;
pub mod user;

// Re-exports
pub use media_kit::*;
pub use profile_tips::*;
pub use user::*;
