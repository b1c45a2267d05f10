// ABOUTME: Transport abstraction consumed by filter resolution and issue listing
// ABOUTME: LinearClient implements it over HTTP; tests substitute in-memory fakes

use async_trait::async_trait;

use crate::{Issue, IssueLabel, IssueQuery, Issues, LinearClient, Result};

/// Remote query capabilities needed to resolve names and fetch issue pages.
///
/// Every call is a single request with no retry; failures are returned as-is.
#[async_trait]
pub trait IssueApi: Send + Sync {
    /// Full listing of issue labels, used to build a name directory.
    async fn issue_labels(&self) -> Result<Vec<IssueLabel>>;

    /// Look up one issue by its human identifier (e.g. `ENG-123`).
    async fn issue(&self, identifier: &str) -> Result<Issue>;

    /// Fetch a single page of issues matching a server-side filter.
    async fn issues(&self, query: &IssueQuery) -> Result<Issues>;

    /// Full-text search restricted by a server-side filter.
    async fn search_issues(
        &self,
        term: &str,
        query: &IssueQuery,
        include_archived: bool,
    ) -> Result<Issues>;
}

#[async_trait]
impl IssueApi for LinearClient {
    async fn issue_labels(&self) -> Result<Vec<IssueLabel>> {
        self.fetch_issue_labels().await
    }

    async fn issue(&self, identifier: &str) -> Result<Issue> {
        self.fetch_issue(identifier).await
    }

    async fn issues(&self, query: &IssueQuery) -> Result<Issues> {
        self.fetch_issues(query).await
    }

    async fn search_issues(
        &self,
        term: &str,
        query: &IssueQuery,
        include_archived: bool,
    ) -> Result<Issues> {
        LinearClient::search_issues(self, term, query, include_archived).await
    }
}
