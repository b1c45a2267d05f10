// ABOUTME: Resolves user-typed label names and parent identifiers to internal ids
// ABOUTME: One directory fetch per label flag; unknown names fail with ranked suggestions

use linear_sdk::{IssueApi, IssueLabel};
use log::debug;
use std::collections::{HashMap, HashSet};

use super::error::FilterError;
use super::suggest::closest_matches;
use crate::constants::filters::MAX_LABEL_SUGGESTIONS;

/// Split a comma-separated list into trimmed, non-empty, case-insensitively unique names.
///
/// The first spelling of a repeated name is kept, in input order.
pub fn parse_name_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Case-insensitive name to id lookup built from one label listing.
#[derive(Debug, Clone, Default)]
pub struct NameDirectory {
    ids_by_name: HashMap<String, String>,
    names: Vec<String>,
}

impl NameDirectory {
    pub fn from_labels(labels: &[IssueLabel]) -> Self {
        let mut directory = Self::default();
        for label in labels {
            // later duplicates win the id slot
            directory
                .ids_by_name
                .insert(label.name.trim().to_lowercase(), label.id.clone());
            directory.names.push(label.name.clone());
        }
        directory
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.ids_by_name
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Display names in listing order, used for suggestions.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Map every name to its id, stopping at the first unknown name.
    pub fn resolve_all(&self, names: &[String]) -> Result<Vec<String>, FilterError> {
        names
            .iter()
            .map(|name| {
                self.lookup(name).map(str::to_string).ok_or_else(|| {
                    FilterError::LabelNotFound {
                        name: name.clone(),
                        suggestions: closest_matches(name, &self.names, MAX_LABEL_SUGGESTIONS),
                    }
                })
            })
            .collect()
    }
}

/// Resolve a raw comma-separated label list to ids.
///
/// An input with no usable names returns no ids without touching the API.
pub async fn resolve_label_ids<A>(api: &A, raw: &str) -> Result<Vec<String>, FilterError>
where
    A: IssueApi + ?Sized,
{
    let names = parse_name_list(raw);
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let labels = api
        .issue_labels()
        .await
        .map_err(FilterError::LabelDirectory)?;
    debug!(
        "Resolving {} label name(s) against {} labels",
        names.len(),
        labels.len()
    );

    NameDirectory::from_labels(&labels).resolve_all(&names)
}

/// Resolve a human issue identifier (e.g. `ENG-123`) to the issue's internal id.
///
/// Lookup misses become `ParentNotFound`; transport failures propagate unchanged.
pub async fn resolve_parent_id<A>(api: &A, identifier: &str) -> Result<String, FilterError>
where
    A: IssueApi + ?Sized,
{
    let identifier = identifier.trim();
    match api.issue(identifier).await {
        Ok(issue) if !issue.id.is_empty() => {
            debug!("Resolved parent {} to {}", identifier, issue.id);
            Ok(issue.id)
        }
        Ok(_) => Err(FilterError::ParentNotFound(identifier.to_string())),
        Err(err) if err.is_not_found() => Err(FilterError::ParentNotFound(identifier.to_string())),
        Err(err) => Err(FilterError::Api(err)),
    }
}
