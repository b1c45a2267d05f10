// ABOUTME: Custom error types for Linear SDK with user-friendly messages
// ABOUTME: Provides specific error handling for different Linear API failure modes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearError {
    #[error("Authentication failed. Check your LINEAR_API_KEY")]
    Auth,

    #[error("Issue {0} not found")]
    IssueNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Invalid API response format")]
    InvalidResponse,

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LinearError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            LinearError::Auth => Some("Get your API key from: https://linear.app/settings/api"),
            LinearError::IssueNotFound(_) => {
                Some("Please check the issue identifier format (e.g., ENG-123)")
            }
            LinearError::Network(_) => Some("Check your internet connection and try again"),
            LinearError::RateLimit => Some("Wait a moment before making another request"),
            LinearError::Timeout => Some("Try again or check your network connection"),
            _ => None,
        }
    }

    /// Whether the failure means the requested entity does not exist, as opposed
    /// to the request itself failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LinearError::IssueNotFound(_) | LinearError::GraphQL(_))
    }
}

impl From<reqwest::Error> for LinearError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LinearError::Timeout
        } else if err.is_decode() {
            LinearError::InvalidResponse
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 => LinearError::Auth,
                429 => LinearError::RateLimit,
                _ => LinearError::Network(err.to_string()),
            }
        } else {
            LinearError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LinearError {
    fn from(_err: serde_json::Error) -> Self {
        LinearError::InvalidResponse
    }
}
