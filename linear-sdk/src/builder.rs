// ABOUTME: Builder pattern implementation for LinearClient configuration
// ABOUTME: Provides type-safe configuration with compile-time validation

use crate::LinearClient;
use crate::constants::timeouts;
use crate::error::LinearError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<LinearClient, LinearError>))]
pub struct LinearClientConfig {
    pub auth_token: SecretString,

    #[builder(default = false)]
    pub verbose: bool,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<LinearClientConfig> for Result<LinearClient, LinearError> {
    fn from(config: LinearClientConfig) -> Self {
        LinearClient::from_config(config)
    }
}

impl LinearClient {
    pub fn builder() -> LinearClientConfigBuilder<((), (), (), ())> {
        LinearClientConfig::builder()
    }
}

/// Validate a user-supplied API base URL and strip any trailing slash.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, LinearError> {
    let parsed = Url::parse(raw)
        .map_err(|e| LinearError::Configuration(format!("Invalid base URL: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed.as_str().trim_end_matches('/').to_string()),
        other => Err(LinearError::Configuration(format!(
            "Invalid base URL scheme '{}'. Expected http or https",
            other
        ))),
    }
}
