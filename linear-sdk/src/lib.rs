// ABOUTME: Linear SDK library providing a typed GraphQL client for the Linear API
// ABOUTME: Exposes issue, label and search queries behind the IssueApi trait

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub mod api;
pub mod builder;
pub mod constants;
pub mod error;
pub mod graphql;
pub mod types;

mod test_helpers;

pub use api::IssueApi;
pub use builder::LinearClientConfig;
pub use error::LinearError;
pub use types::{
    Issue, IssueLabel, IssueQuery, Issues, LabelConnection, OrderBy, PageInfo, ParentIssue,
    ProjectRef, Team, User, WorkflowState,
};

use crate::graphql::{GraphQLResponse, QueryBuilder, documents};

pub type Result<T> = std::result::Result<T, LinearError>;

pub struct LinearClient {
    client: reqwest::Client,
    endpoint: String,
    verbose: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueLabelsData {
    issue_labels: LabelConnection,
}

#[derive(Deserialize)]
struct IssueData {
    issue: Option<Issue>,
}

#[derive(Deserialize)]
struct IssuesData {
    issues: Issues,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchIssuesData {
    search_issues: Issues,
}

impl LinearClient {
    pub(crate) fn from_config(config: LinearClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(config.auth_token.expose_secret()).map_err(|_| {
                LinearError::Configuration("API key contains invalid characters".to_string())
            })?,
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));

        let base_url = match config.base_url.as_deref() {
            Some(raw) => builder::normalize_base_url(raw)?,
            None => constants::urls::LINEAR_API_BASE.to_string(),
        };

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| LinearError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url, constants::urls::GRAPHQL_PATH),
            verbose: config.verbose,
        })
    }

    async fn execute<T: DeserializeOwned>(&self, request: QueryBuilder) -> Result<T> {
        if self.verbose {
            log::info!(
                "POST {} ({} variables)",
                self.endpoint,
                request.variables().len()
            );
        }
        log::debug!("GraphQL variables: {:?}", request.variables());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GraphQLResponse<T> = response.json().await?;
        body.into_result()
    }

    pub async fn fetch_issue_labels(&self) -> Result<Vec<IssueLabel>> {
        let request = QueryBuilder::new(documents::ISSUE_LABELS)
            .variable("first", constants::queries::LABEL_DIRECTORY_PAGE_SIZE)?;
        let data: IssueLabelsData = self.execute(request).await?;
        Ok(data.issue_labels.nodes)
    }

    pub async fn fetch_issue(&self, identifier: &str) -> Result<Issue> {
        let request = QueryBuilder::new(documents::ISSUE).variable("id", identifier)?;
        let data: IssueData = self.execute(request).await?;
        data.issue
            .ok_or_else(|| LinearError::IssueNotFound(identifier.to_string()))
    }

    pub async fn fetch_issues(&self, query: &IssueQuery) -> Result<Issues> {
        let request = QueryBuilder::new(documents::ISSUES).variables_from(query)?;
        let data: IssuesData = self.execute(request).await?;
        Ok(data.issues)
    }

    pub async fn search_issues(
        &self,
        term: &str,
        query: &IssueQuery,
        include_archived: bool,
    ) -> Result<Issues> {
        let request = QueryBuilder::new(documents::SEARCH_ISSUES)
            .variables_from(query)?
            .variable("term", term)?
            .variable("includeArchived", include_archived)?;
        let data: SearchIssuesData = self.execute(request).await?;
        Ok(data.search_issues)
    }
}
