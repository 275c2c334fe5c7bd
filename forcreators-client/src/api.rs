//! API seam between the session controller and the gateway

use async_trait::async_trait;

use crate::error::ApiResult;
use shared::client::{ContactRequest, LoginRequest, SignupRequest, UserIdResponse};
use shared::models::{MediaKit, ProfileTips, UserRecord};

/// Remote profile-scoring API.
///
/// [`crate::HttpClient`] is the network implementation; tests drive the
/// controller through scripted implementations instead.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Create an account, returning the new profile identifier
    async fn signup(&self, request: &SignupRequest) -> ApiResult<UserIdResponse>;

    /// Resolve credentials to an existing profile identifier
    async fn login(&self, request: &LoginRequest) -> ApiResult<UserIdResponse>;

    /// Fetch the full profile record (including the nested plan)
    async fn fetch_user(&self, user_id: &str) -> ApiResult<UserRecord>;

    /// Fetch a fresh media-kit snapshot
    async fn fetch_media_kit(&self, user_id: &str) -> ApiResult<MediaKit>;

    /// Fetch advisory tips for the profile
    async fn fetch_profile_tips(&self, user_id: &str) -> ApiResult<ProfileTips>;

    /// Submit a contact-form message
    async fn send_contact(&self, request: &ContactRequest) -> ApiResult<()>;
}
