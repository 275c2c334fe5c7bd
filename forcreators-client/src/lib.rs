//! ForCreators Client - orchestration core for the profile-scoring API
//!
//! Drives the signup/login/media-kit flows against the remote API and
//! derives the display-ready dashboard view from the loaded records.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod forms;
pub mod http;
pub mod view;

pub use api::ProfileApi;
pub use config::{ClientConfig, FetchPolicy};
pub use controller::{DashboardState, FlowPhase, FlowSlot, SessionController, TipsState};
pub use error::{ApiError, ApiResult};
pub use forms::{ContactForm, LoginForm, SignupForm};
pub use http::HttpClient;
pub use view::DashboardView;

// Re-export shared types for convenience
pub use shared::client::{ContactRequest, LoginRequest, SignupRequest, UserIdResponse};
pub use shared::models::{MediaKit, Plan, ProfileTips, Segment, UserRecord};
