// ABOUTME: Error type for filter validation and name resolution failures
// ABOUTME: Messages are shown to users verbatim, transport failures are wrapped unchanged

use linear_sdk::LinearError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Cannot combine --has-parent and --no-parent")]
    ConflictingParentFlags,

    #[error("Cannot combine --parent with --has-parent/--no-parent")]
    ParentWithPresenceFlag,

    #[error("Invalid project ID format: {0}")]
    InvalidProjectId(String),

    #[error("Invalid priority: {0} (expected 0-4)")]
    InvalidPriority(u8),

    #[error("Invalid newer-than value: {0}")]
    InvalidTimeWindow(String),

    #[error("issue label not found: '{name}'{}", format_suggestions(.suggestions))]
    LabelNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("Parent issue '{0}' not found")]
    ParentNotFound(String),

    #[error("failed to get issue labels: {0}")]
    LabelDirectory(#[source] LinearError),

    #[error(transparent)]
    Api(#[from] LinearError),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {})", suggestions.join(", "))
    }
}

impl FilterError {
    /// The underlying transport error, when the failure came from the API.
    pub fn api_error(&self) -> Option<&LinearError> {
        match self {
            FilterError::LabelDirectory(err) | FilterError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// True for failures detected from local input alone.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            FilterError::ConflictingParentFlags
                | FilterError::ParentWithPresenceFlag
                | FilterError::InvalidProjectId(_)
                | FilterError::InvalidPriority(_)
                | FilterError::InvalidTimeWindow(_)
        )
    }
}
