// ABOUTME: Centralized constants for the Linear SDK
// ABOUTME: Contains timeouts, API URLs and query page sizes

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Linear API URLs
pub mod urls {
    /// Base URL for Linear API GraphQL endpoint
    pub const LINEAR_API_BASE: &str = "https://api.linear.app";

    /// Path of the GraphQL endpoint below the base URL
    pub const GRAPHQL_PATH: &str = "/graphql";
}

/// Query sizing
pub mod queries {
    /// Labels fetched by the single directory listing request
    pub const LABEL_DIRECTORY_PAGE_SIZE: i32 = 250;
}

pub const USER_AGENT: &str = concat!("linear-cli/", env!("CARGO_PKG_VERSION"));
