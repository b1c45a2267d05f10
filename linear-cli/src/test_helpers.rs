// ABOUTME: In-memory IssueApi fake and issue fixtures for unit tests
// ABOUTME: Counts every remote call so tests can assert nothing was fetched

use async_trait::async_trait;
use linear_sdk::{
    Issue, IssueApi, IssueLabel, IssueQuery, Issues, LabelConnection, LinearError, PageInfo,
    ParentIssue, Result,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn label(id: &str, name: &str) -> IssueLabel {
    IssueLabel {
        id: id.to_string(),
        name: name.to_string(),
        color: None,
    }
}

/// Issue fixture carrying only what filtering looks at.
pub fn issue(id: &str, labels: &[(&str, &str)], parent: Option<&str>) -> Issue {
    Issue {
        id: id.to_string(),
        identifier: id.to_uppercase(),
        title: format!("Issue {}", id),
        priority: None,
        priority_label: None,
        state: None,
        assignee: None,
        team: None,
        project: None,
        labels: Some(LabelConnection {
            nodes: labels.iter().map(|(id, name)| label(id, name)).collect(),
        }),
        parent: parent.map(|parent_id| ParentIssue {
            id: parent_id.to_string(),
            identifier: format!("P-{}", parent_id),
            title: String::new(),
        }),
        created_at: None,
        updated_at: None,
        url: None,
    }
}

pub fn page(nodes: Vec<Issue>, has_next_page: bool) -> Issues {
    Issues {
        nodes,
        page_info: PageInfo {
            has_next_page,
            end_cursor: None,
        },
    }
}

/// Standard label directory: Bug, Backend, Frontend.
pub fn default_labels() -> Vec<IssueLabel> {
    vec![
        label("L_bug", "Bug"),
        label("L_backend", "Backend"),
        label("L_frontend", "Frontend"),
    ]
}

#[derive(Default)]
pub struct FakeApi {
    labels: Vec<IssueLabel>,
    label_error: Option<fn() -> LinearError>,
    issues_by_identifier: HashMap<String, Issue>,
    issue_error: Option<fn() -> LinearError>,
    issues_error: Option<fn() -> LinearError>,
    page: Issues,
    pub label_calls: AtomicUsize,
    pub issue_calls: AtomicUsize,
    pub issues_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    last_query: Mutex<Option<IssueQuery>>,
    last_search: Mutex<Option<(String, bool)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: Vec<IssueLabel>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_label_error(mut self, error: fn() -> LinearError) -> Self {
        self.label_error = Some(error);
        self
    }

    pub fn with_parent(mut self, identifier: &str, id: &str) -> Self {
        let mut parent = issue(id, &[], None);
        parent.identifier = identifier.to_string();
        self.issues_by_identifier
            .insert(identifier.to_string(), parent);
        self
    }

    pub fn with_issue_error(mut self, error: fn() -> LinearError) -> Self {
        self.issue_error = Some(error);
        self
    }

    pub fn with_issues_error(mut self, error: fn() -> LinearError) -> Self {
        self.issues_error = Some(error);
        self
    }

    pub fn with_page(mut self, page: Issues) -> Self {
        self.page = page;
        self
    }

    pub fn calls(&self, counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.calls(&self.label_calls)
            + self.calls(&self.issue_calls)
            + self.calls(&self.issues_calls)
            + self.calls(&self.search_calls)
    }

    pub fn last_query(&self) -> Option<IssueQuery> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn last_search(&self) -> Option<(String, bool)> {
        self.last_search.lock().unwrap().clone()
    }

    fn page_or_error(&self) -> Result<Issues> {
        match self.issues_error {
            Some(error) => Err(error()),
            None => Ok(self.page.clone()),
        }
    }
}

#[async_trait]
impl IssueApi for FakeApi {
    async fn issue_labels(&self) -> Result<Vec<IssueLabel>> {
        self.label_calls.fetch_add(1, Ordering::SeqCst);
        match self.label_error {
            Some(error) => Err(error()),
            None => Ok(self.labels.clone()),
        }
    }

    async fn issue(&self, identifier: &str) -> Result<Issue> {
        self.issue_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.issue_error {
            return Err(error());
        }
        self.issues_by_identifier
            .get(identifier)
            .cloned()
            .ok_or_else(|| LinearError::IssueNotFound(identifier.to_string()))
    }

    async fn issues(&self, query: &IssueQuery) -> Result<Issues> {
        self.issues_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.page_or_error()
    }

    async fn search_issues(
        &self,
        term: &str,
        query: &IssueQuery,
        include_archived: bool,
    ) -> Result<Issues> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        *self.last_search.lock().unwrap() = Some((term.to_string(), include_archived));
        self.page_or_error()
    }
}
