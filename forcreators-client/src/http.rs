//! HTTP gateway for the ForCreators API

use async_trait::async_trait;
use http::Method;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ProfileApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, NETWORK_ERROR_MESSAGE};
use shared::client::{ContactRequest, LoginRequest, SignupRequest, UserIdResponse};
use shared::models::{MediaKit, ProfileTips, UserRecord};

/// HTTP client issuing JSON requests against the fixed base origin.
///
/// Holds no mutable state; a single instance can serve unrelated requests
/// concurrently.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issue a request and return the parsed response body.
    ///
    /// `path` is relative to the base origin and starts with `/`. The body,
    /// when present, is sent as JSON with a `Content-Type: application/json`
    /// header.
    pub async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);

        if let Some(body) = body {
            request = request.json(body);
        } else {
            request = request.header(reqwest::header::CONTENT_TYPE, "application/json");
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        Self::handle_response(response).await
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let value = self.call(Method::GET, path, None).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        let value = self.call(Method::POST, path, Some(&body)).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();
        let text = response.text().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status,
                message: error_detail(&text)
                    .unwrap_or_else(|| NETWORK_ERROR_MESSAGE.to_string()),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(Into::into)
    }
}

/// Extract the `detail` message from an error body, if it carries one.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl ProfileApi for HttpClient {
    async fn signup(&self, request: &SignupRequest) -> ApiResult<UserIdResponse> {
        self.post("/api/signup", request).await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<UserIdResponse> {
        self.post("/api/login", request).await
    }

    async fn fetch_user(&self, user_id: &str) -> ApiResult<UserRecord> {
        self.get(&format!("/api/user?user_id={}", urlencoding::encode(user_id)))
            .await
    }

    async fn fetch_media_kit(&self, user_id: &str) -> ApiResult<MediaKit> {
        self.get(&format!(
            "/api/media-kit?user_id={}",
            urlencoding::encode(user_id)
        ))
        .await
    }

    async fn fetch_profile_tips(&self, user_id: &str) -> ApiResult<ProfileTips> {
        self.get(&format!(
            "/api/profile-tips?user_id={}",
            urlencoding::encode(user_id)
        ))
        .await
    }

    async fn send_contact(&self, request: &ContactRequest) -> ApiResult<()> {
        self.post::<Value, _>("/api/contact", request).await?;
        Ok(())
    }
}
