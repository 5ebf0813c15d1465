//! Scene generator trait and client configuration

use crate::error::Result;
use crate::types::{GeneratedVoxel, GenerationRequest};
use async_trait::async_trait;

/// Trait for AI scene-generation providers
///
/// Implementations wrap a concrete model API and return the voxel point
/// list for a prompt. At most one request is in flight per session; the
/// issuing layer enforces that, not the provider.
#[async_trait]
pub trait SceneGenerator: Send + Sync {
    /// Name of this provider (for logs and UI)
    fn name(&self) -> &str;

    /// Generate a voxel sculpture for the request
    ///
    /// An empty list is a valid response and means "no preview produced".
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedVoxel>>;
}

/// Configuration for a generation client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API endpoint URL
    pub endpoint: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Model identifier to request
    pub model: String,
    /// Request timeout
    pub timeout: std::time::Duration,
    /// Maximum retries for transient failures
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: String::new(),
            timeout: std::time::Duration::from_secs(60),
            max_retries: 3,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration for the specified model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
