// ABOUTME: Normalized, validated set of user filter predicates
// ABOUTME: Built once from parsed flags plus config defaults, then read-only

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::FilterError;
use super::time_window::parse_newer_than;
use crate::cli::IssueFilterArgs;
use crate::constants::filters::SELF_ASSIGNEE;

static UUID_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .ok()
});

pub fn is_valid_uuid(value: &str) -> bool {
    UUID_RE.as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    /// The authenticated user
    Me,
    Email(String),
}

impl Assignee {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(SELF_ASSIGNEE) {
            Assignee::Me
        } else {
            Assignee::Email(raw.to_string())
        }
    }
}

/// Values used when the matching flag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDefaults {
    pub team: Option<String>,
    pub newer_than: Option<String>,
}

/// Everything the user asked to filter by.
///
/// Label fields hold the raw comma-separated input; they are split and
/// resolved to ids by the filter builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    pub assignee: Option<Assignee>,
    pub state: Option<String>,
    pub team: Option<String>,
    pub priority: Option<u8>,
    /// Lower bound on creation time, RFC3339
    pub created_after: Option<String>,
    pub include_completed: bool,
    pub project_id: Option<String>,
    pub labels_all: Option<String>,
    pub labels_any: Option<String>,
    pub labels_not: Option<String>,
    pub unlabeled: bool,
    pub parent: Option<String>,
    pub has_parent: bool,
    pub no_parent: bool,
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl PredicateSet {
    pub fn from_args(
        args: &IssueFilterArgs,
        defaults: &FilterDefaults,
        now: DateTime<Utc>,
    ) -> Result<Self, FilterError> {
        let newer_than = args
            .newer_than
            .as_deref()
            .or(defaults.newer_than.as_deref())
            .unwrap_or_default();

        let predicates = PredicateSet {
            assignee: non_blank(args.assignee.as_ref()).map(|a| Assignee::parse(&a)),
            state: non_blank(args.state.as_ref()),
            team: non_blank(args.team.as_ref()).or_else(|| non_blank(defaults.team.as_ref())),
            priority: args.priority,
            created_after: parse_newer_than(newer_than, now)?,
            include_completed: args.include_completed,
            project_id: non_blank(args.project.as_ref()),
            labels_all: non_blank(args.label.as_ref()),
            labels_any: non_blank(args.label_any.as_ref()),
            labels_not: non_blank(args.label_not.as_ref()),
            unlabeled: args.unlabeled,
            parent: non_blank(args.parent.as_ref()),
            has_parent: args.has_parent,
            no_parent: args.no_parent,
        };

        predicates.validate()?;
        Ok(predicates)
    }

    /// Reject contradictory or malformed flags before any remote call.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.has_parent && self.no_parent {
            return Err(FilterError::ConflictingParentFlags);
        }
        if self.parent.is_some() && (self.has_parent || self.no_parent) {
            return Err(FilterError::ParentWithPresenceFlag);
        }
        if let Some(project) = &self.project_id {
            if !is_valid_uuid(project) {
                return Err(FilterError::InvalidProjectId(project.clone()));
            }
        }
        if let Some(priority) = self.priority.filter(|p| *p > 4) {
            return Err(FilterError::InvalidPriority(priority));
        }
        Ok(())
    }

    pub fn has_label_predicates(&self) -> bool {
        self.labels_all.is_some()
            || self.labels_any.is_some()
            || self.labels_not.is_some()
            || self.unlabeled
    }
}
