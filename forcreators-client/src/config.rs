//! Client configuration

/// When the media kit is fetched relative to an identity load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Fetch the media kit right after every successful identity load.
    EagerMediaKit,
    /// Fetch the media kit only on explicit request.
    #[default]
    OnDemandMediaKit,
}

/// Configuration for connecting to the ForCreators API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base origin (e.g. "https://forcreators.vip")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Media-kit fetch policy applied by the session controller
    pub fetch_policy: FetchPolicy,
}

impl ClientConfig {
    /// Create a new configuration for the given base origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            fetch_policy: FetchPolicy::default(),
        }
    }

    /// Read the base origin from `FORCREATORS_API_URL`, falling back to the
    /// built-in default
    pub fn from_env() -> Self {
        let base_url = std::env::var("FORCREATORS_API_URL")
            .unwrap_or_else(|_| shared::DEFAULT_API_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the media-kit fetch policy
    pub fn with_fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.fetch_policy = policy;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(shared::DEFAULT_API_BASE_URL)
    }
}
