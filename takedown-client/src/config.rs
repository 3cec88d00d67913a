//! Client configuration

/// Configuration for connecting to the takedown backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Bearer token to start the session with, if already known
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `TAKEDOWN_API_BASE_URL` overrides the default base URL,
    /// `TAKEDOWN_API_TOKEN` seeds the session token.
    pub fn from_env() -> Self {
        let base_url = std::env::var("TAKEDOWN_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("TAKEDOWN_API_TOKEN") {
            config.token = Some(token);
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
