// ABOUTME: Wire types for Linear issues, labels, parents and paginated issue collections
// ABOUTME: Optional nested fields deserialize leniently so missing data reads as absent

use serde::{Deserialize, Serialize};

/// A label as returned by the `issueLabels` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLabel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelConnection {
    #[serde(default)]
    pub nodes: Vec<IssueLabel>,
}

/// Parent reference carried by sub-issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentIssue {
    pub id: String,
    pub identifier: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(default)]
    pub priority_label: Option<String>,
    #[serde(default)]
    pub state: Option<WorkflowState>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub labels: Option<LabelConnection>,
    #[serde(default)]
    pub parent: Option<ParentIssue>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Issue {
    /// Labels attached to the issue; a missing connection reads as no labels.
    pub fn label_nodes(&self) -> &[IssueLabel] {
        self.labels
            .as_ref()
            .map(|connection| connection.nodes.as_slice())
            .unwrap_or_default()
    }

    pub fn is_unlabeled(&self) -> bool {
        self.label_nodes().is_empty()
    }

    /// Internal id of the parent, if the issue has a non-empty parent reference.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent
            .as_ref()
            .map(|parent| parent.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// One fetched page of issues.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issues {
    #[serde(default)]
    pub nodes: Vec<Issue>,
    #[serde(default)]
    pub page_info: PageInfo,
}

/// Server-side sort order accepted by the `issues` and `searchIssues` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    CreatedAt,
    UpdatedAt,
}

/// Parameters for a single page fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueQuery {
    pub filter: serde_json::Value,
    #[serde(rename = "first")]
    pub limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

impl IssueQuery {
    pub fn new(filter: serde_json::Value, limit: i32) -> Self {
        Self {
            filter,
            limit,
            order_by: None,
        }
    }

    pub fn order_by(mut self, order_by: Option<OrderBy>) -> Self {
        self.order_by = order_by;
        self
    }
}
