// ABOUTME: Issue listing and search pipelines shared by the CLI commands
// ABOUTME: Builds the filter, fetches one page and applies residual predicates locally

use linear_sdk::{IssueApi, IssueQuery, Issues, OrderBy};
use log::debug;

use crate::filters::{FilterBuilder, FilterError, FilterWarning, PredicateSet, post_filter};

/// Where a page of issues comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSource<'q> {
    List,
    Search {
        term: &'q str,
        include_archived: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: i32,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredIssues {
    pub issues: Issues,
    /// Issue count before local filtering
    pub fetched: usize,
}

/// Join search words and reject an empty query.
pub fn search_term(words: &[String]) -> Result<String, SearchError> {
    let term = words.join(" ").trim().to_string();
    if term.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(term)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search query is required")]
    EmptyQuery,
}

/// Resolve predicates, fetch a single page and post-filter it.
///
/// `on_warning` sees every precedence warning once the filter is resolved,
/// before the issue fetch starts.
pub async fn fetch_filtered_issues<A, W>(
    api: &A,
    predicates: &PredicateSet,
    source: IssueSource<'_>,
    options: ListOptions,
    mut on_warning: W,
) -> Result<FilteredIssues, FilterError>
where
    A: IssueApi + ?Sized,
    W: FnMut(&FilterWarning),
{
    let resolved = FilterBuilder::new(predicates).build(api).await?;
    resolved.warnings.iter().for_each(&mut on_warning);
    let query = IssueQuery::new(resolved.server.to_json(), options.limit).order_by(options.order_by);

    let page = match source {
        IssueSource::List => api.issues(&query).await?,
        IssueSource::Search {
            term,
            include_archived,
        } => api.search_issues(term, &query, include_archived).await?,
    };

    let fetched = page.nodes.len();
    let issues = post_filter(&page, &resolved.residual);
    debug!(
        "Fetched {} issue(s), {} after local filtering",
        fetched,
        issues.nodes.len()
    );

    Ok(FilteredIssues { issues, fetched })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Assignee;
    use crate::test_helpers::{FakeApi, default_labels, issue, page};
    use linear_sdk::LinearError;
    use serde_json::json;

    fn options() -> ListOptions {
        ListOptions {
            limit: 50,
            order_by: None,
        }
    }

    fn sample_page() -> Issues {
        page(
            vec![
                issue("a", &[("L_bug", "Bug")], None),
                issue(
                    "b",
                    &[("L_bug", "Bug"), ("L_backend", "Backend")],
                    Some("issue-parent-uuid"),
                ),
                issue("c", &[], None),
            ],
            true,
        )
    }

    #[test]
    fn test_search_term() {
        assert_eq!(
            search_term(&["login".to_string(), "bug".to_string()]).unwrap(),
            "login bug"
        );
        assert_eq!(
            search_term(&["  ".to_string()]).unwrap_err(),
            SearchError::EmptyQuery
        );
        assert_eq!(
            SearchError::EmptyQuery.to_string(),
            "Search query is required"
        );
    }

    #[tokio::test]
    async fn test_list_sends_filter_and_post_filters() {
        let api = FakeApi::new()
            .with_labels(default_labels())
            .with_page(sample_page());
        let predicates = PredicateSet {
            labels_all: Some("bug,backend".to_string()),
            assignee: Some(Assignee::Me),
            ..Default::default()
        };
        let options = ListOptions {
            limit: 10,
            order_by: Some(OrderBy::CreatedAt),
        };

        let result = fetch_filtered_issues(&api, &predicates, IssueSource::List, options, |_| {})
            .await
            .unwrap();

        assert_eq!(result.fetched, 3);
        assert_eq!(result.issues.nodes.len(), 1);
        assert_eq!(result.issues.nodes[0].id, "b");
        assert!(result.issues.page_info.has_next_page);

        let query = api.last_query().unwrap();
        assert_eq!(query.limit, 10);
        assert_eq!(query.order_by, Some(OrderBy::CreatedAt));
        assert_eq!(query.filter["assignee"], json!({ "isMe": { "eq": true } }));
        assert_eq!(
            query.filter["labels"],
            json!({ "some": { "id": { "in": ["L_bug", "L_backend"] } } })
        );
        assert_eq!(api.calls(&api.issues_calls), 1);
        assert_eq!(api.calls(&api.search_calls), 0);
    }

    #[tokio::test]
    async fn test_search_uses_same_filter_pipeline() {
        let api = FakeApi::new()
            .with_parent("ENG-100", "issue-parent-uuid")
            .with_page(sample_page());
        let predicates = PredicateSet {
            parent: Some("ENG-100".to_string()),
            include_completed: true,
            ..Default::default()
        };
        let source = IssueSource::Search {
            term: "login",
            include_archived: true,
        };

        let result = fetch_filtered_issues(&api, &predicates, source, options(), |_| {})
            .await
            .unwrap();

        assert_eq!(result.issues.nodes.len(), 1);
        assert_eq!(result.issues.nodes[0].id, "b");
        assert_eq!(api.last_search(), Some(("login".to_string(), true)));
        assert_eq!(
            api.last_query().unwrap().filter,
            json!({ "parent": { "id": { "eq": "issue-parent-uuid" } } })
        );
        assert_eq!(api.calls(&api.issues_calls), 0);
    }

    #[tokio::test]
    async fn test_warnings_are_reported() {
        let api = FakeApi::new()
            .with_labels(default_labels())
            .with_page(sample_page());
        let predicates = PredicateSet {
            unlabeled: true,
            labels_any: Some("Bug".to_string()),
            ..Default::default()
        };

        let mut warnings = Vec::new();
        let result = fetch_filtered_issues(&api, &predicates, IssueSource::List, options(), |w| {
            warnings.push(*w)
        })
        .await
        .unwrap();

        assert_eq!(warnings, vec![FilterWarning::UnlabeledOverrides]);
        assert_eq!(result.issues.nodes.len(), 1);
        assert_eq!(result.issues.nodes[0].id, "c");
    }

    #[tokio::test]
    async fn test_warnings_are_reported_before_fetch_failure() {
        let api = FakeApi::new()
            .with_labels(default_labels())
            .with_issues_error(|| LinearError::RateLimit);
        let predicates = PredicateSet {
            labels_all: Some("Bug".to_string()),
            labels_not: Some("Backend".to_string()),
            ..Default::default()
        };

        let mut warnings = Vec::new();
        let err = fetch_filtered_issues(&api, &predicates, IssueSource::List, options(), |w| {
            warnings.push(*w)
        })
        .await
        .unwrap_err();

        assert!(matches!(err, FilterError::Api(LinearError::RateLimit)));
        assert_eq!(warnings, vec![FilterWarning::LabelAllOverrides]);
        assert_eq!(api.calls(&api.issues_calls), 1);
    }

    #[tokio::test]
    async fn test_invalid_predicates_never_fetch() {
        let api = FakeApi::new().with_page(sample_page());
        let predicates = PredicateSet {
            parent: Some("ENG-100".to_string()),
            no_parent: true,
            ..Default::default()
        };

        let err = fetch_filtered_issues(&api, &predicates, IssueSource::List, options(), |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, FilterError::ParentWithPresenceFlag));
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_page_after_filtering() {
        let api = FakeApi::new().with_page(sample_page());
        let predicates = PredicateSet {
            has_parent: true,
            unlabeled: true,
            ..Default::default()
        };

        let result = fetch_filtered_issues(&api, &predicates, IssueSource::List, options(), |_| {})
            .await
            .unwrap();

        assert!(result.issues.nodes.is_empty());
        assert_eq!(result.fetched, 3);
    }
}
