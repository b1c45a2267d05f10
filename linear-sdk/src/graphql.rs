// ABOUTME: GraphQL request building and response envelope handling for the Linear API
// ABOUTME: Holds the query documents used by the client and decodes data/errors payloads

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LinearError;

macro_rules! issue_fields {
    () => {
        r#"
    id
    identifier
    title
    priority
    priorityLabel
    state { name type }
    assignee { name email }
    team { key name }
    project { id name }
    labels { nodes { id name color } }
    parent { id identifier title }
    createdAt
    updatedAt
    url
"#
    };
}

/// Query documents understood by the Linear API.
pub mod documents {
    pub const ISSUE_LABELS: &str = r#"
query IssueLabels($first: Int) {
  issueLabels(first: $first) {
    nodes { id name color }
  }
}
"#;

    pub const ISSUE: &str = concat!(
        "query Issue($id: String!) {\n  issue(id: $id) {",
        issue_fields!(),
        "}\n}\n"
    );

    pub const ISSUES: &str = concat!(
        "query Issues($filter: IssueFilter, $first: Int, $orderBy: PaginationOrderBy) {\n",
        "  issues(filter: $filter, first: $first, orderBy: $orderBy) {\n",
        "    pageInfo { hasNextPage endCursor }\n    nodes {",
        issue_fields!(),
        "}\n  }\n}\n"
    );

    pub const SEARCH_ISSUES: &str = concat!(
        "query SearchIssues($term: String!, $filter: IssueFilter, $first: Int, ",
        "$orderBy: PaginationOrderBy, $includeArchived: Boolean) {\n",
        "  searchIssues(term: $term, filter: $filter, first: $first, ",
        "orderBy: $orderBy, includeArchived: $includeArchived) {\n",
        "    pageInfo { hasNextPage endCursor }\n    nodes {",
        issue_fields!(),
        "}\n  }\n}\n"
    );
}

/// Builder for a GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct QueryBuilder {
    query: &'static str,
    variables: Map<String, Value>,
}

impl QueryBuilder {
    /// Create a new query builder
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            variables: Map::new(),
        }
    }

    /// Add a variable to the query
    pub fn variable<T: Serialize>(mut self, name: &str, value: T) -> Result<Self, LinearError> {
        self.variables
            .insert(name.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Merge every field of a serializable struct in as variables
    pub fn variables_from<T: Serialize>(mut self, value: &T) -> Result<Self, LinearError> {
        if let Value::Object(fields) = serde_json::to_value(value)? {
            self.variables.extend(fields);
        }
        Ok(self)
    }

    /// Get the query document
    pub fn query(&self) -> &str {
        self.query
    }

    /// Get the variables
    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
}

/// The `{ data, errors }` envelope every GraphQL response arrives in.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLErrorEntry>>,
}

impl<T: DeserializeOwned> GraphQLResponse<T> {
    pub fn into_result(self) -> Result<T, LinearError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LinearError::GraphQL(message));
        }

        self.data.ok_or(LinearError::InvalidResponse)
    }
}
