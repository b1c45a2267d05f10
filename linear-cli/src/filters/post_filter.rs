// ABOUTME: Client-side filtering of fetched issues for predicates the server cannot express exactly
// ABOUTME: Preserves server order and page info; never fetches more results

use linear_sdk::{Issue, Issues};
use std::collections::HashSet;

/// Parent relationship an issue must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParentConstraint {
    #[default]
    Any,
    /// Child of this internal parent id
    Id(String),
    HasParent,
    NoParent,
}

impl ParentConstraint {
    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            ParentConstraint::Any => true,
            ParentConstraint::Id(id) => issue.parent_id() == Some(id.as_str()),
            ParentConstraint::HasParent => issue.parent_id().is_some(),
            ParentConstraint::NoParent => issue.parent_id().is_none(),
        }
    }
}

/// Predicates re-checked locally after each fetch, with label names already resolved to ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualPredicates {
    pub label_all: Vec<String>,
    pub label_any: Vec<String>,
    pub label_not: Vec<String>,
    pub unlabeled: bool,
    pub parent: ParentConstraint,
}

impl ResidualPredicates {
    pub fn is_empty(&self) -> bool {
        self.label_all.is_empty()
            && self.label_any.is_empty()
            && self.label_not.is_empty()
            && !self.unlabeled
            && self.parent == ParentConstraint::Any
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        self.matches_labels(issue) && self.parent.matches(issue)
    }

    fn matches_labels(&self, issue: &Issue) -> bool {
        if self.unlabeled {
            return issue.is_unlabeled();
        }

        let present: HashSet<&str> = issue
            .label_nodes()
            .iter()
            .map(|label| label.id.as_str())
            .collect();

        self.label_all.iter().all(|id| present.contains(id.as_str()))
            && (self.label_any.is_empty()
                || self.label_any.iter().any(|id| present.contains(id.as_str())))
            && !self.label_not.iter().any(|id| present.contains(id.as_str()))
    }
}

/// Keep the issues satisfying every residual predicate, in their original order.
pub fn post_filter(issues: &Issues, residual: &ResidualPredicates) -> Issues {
    if residual.is_empty() {
        return issues.clone();
    }

    Issues {
        nodes: issues
            .nodes
            .iter()
            .filter(|issue| residual.matches(issue))
            .cloned()
            .collect(),
        page_info: issues.page_info.clone(),
    }
}
