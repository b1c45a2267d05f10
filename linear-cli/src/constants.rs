// ABOUTME: Centralized constants for the Linear CLI application
// ABOUTME: Contains query limits, filter defaults, UI sizes and progress timing

/// Default limits for issue queries
pub mod limits {
    pub const DEFAULT_ISSUE_LIMIT: i32 = 50;
}

/// Filter resolution defaults
pub mod filters {
    /// Assignee value that means "the authenticated user"
    pub const SELF_ASSIGNEE: &str = "me";

    /// Time window applied when --newer-than is not given
    pub const DEFAULT_NEWER_THAN: &str = "6_months_ago";

    /// Time window value that disables the creation-date filter
    pub const ALL_TIME: &str = "all_time";

    /// Maximum number of "did you mean" names attached to an unknown label
    pub const MAX_LABEL_SUGGESTIONS: usize = 3;
}

/// Timeout configurations for various operations
pub mod timeouts {
    /// Progress spinner tick interval for smooth animation
    pub const PROGRESS_BAR_TICK_MS: u64 = 80;
}

/// UI and formatting constants
pub mod ui {
    pub const TITLE_MAX_LEN: usize = 40;

    /// Label names shown per row before collapsing into "+N"
    pub const MAX_LABELS_SHOWN: usize = 3;
    pub const LABELS_MAX_LEN: usize = 25;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert_eq!(limits::DEFAULT_ISSUE_LIMIT, 50);
    }

    #[test]
    fn test_filter_defaults() {
        assert_eq!(filters::SELF_ASSIGNEE, "me");
        assert_eq!(filters::DEFAULT_NEWER_THAN, "6_months_ago");
        assert_eq!(filters::ALL_TIME, "all_time");
        assert_eq!(filters::MAX_LABEL_SUGGESTIONS, 3);
    }

    #[test]
    fn test_ui_constants() {
        assert_eq!(timeouts::PROGRESS_BAR_TICK_MS, 80);
        assert!(ui::LABELS_MAX_LEN > 3);
        assert!(ui::TITLE_MAX_LEN > 3);
    }
}
