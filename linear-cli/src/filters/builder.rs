// ABOUTME: Turns a validated predicate set into a server filter plus residual local predicates
// ABOUTME: Applies label flag precedence, resolves names to ids and records user-facing warnings

use linear_sdk::IssueApi;
use log::debug;
use std::fmt;

use super::error::FilterError;
use super::payload::{FieldCondition, LabelCondition, ServerFilter};
use super::post_filter::{ParentConstraint, ResidualPredicates};
use super::predicates::{Assignee, PredicateSet};
use super::resolver::{resolve_label_ids, resolve_parent_id};
use crate::types::StateType;

/// Non-fatal notice about flags that were ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterWarning {
    LabelAllOverrides,
    UnlabeledOverrides,
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterWarning::LabelAllOverrides => {
                write!(f, "--label specified; ignoring --label-any/--label-not/--unlabeled")
            }
            FilterWarning::UnlabeledOverrides => {
                write!(f, "--unlabeled specified; ignoring --label-any/--label-not")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub server: ServerFilter,
    pub residual: ResidualPredicates,
    pub warnings: Vec<FilterWarning>,
}

/// Which label flags take effect. `--label` beats everything else; `--unlabeled`
/// discards `--label-any`/`--label-not` after they resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelPlan<'p> {
    Unfiltered,
    AllOf {
        names: &'p str,
        overrides_others: bool,
    },
    AnyOrNot {
        any: Option<&'p str>,
        not: Option<&'p str>,
        unlabeled: bool,
    },
}

impl<'p> LabelPlan<'p> {
    fn from_predicates(predicates: &'p PredicateSet) -> Self {
        if !predicates.has_label_predicates() {
            return LabelPlan::Unfiltered;
        }

        let any = predicates.labels_any.as_deref();
        let not = predicates.labels_not.as_deref();

        match predicates.labels_all.as_deref() {
            Some(names) => LabelPlan::AllOf {
                names,
                overrides_others: any.is_some() || not.is_some() || predicates.unlabeled,
            },
            None => LabelPlan::AnyOrNot {
                any,
                not,
                unlabeled: predicates.unlabeled,
            },
        }
    }
}

pub struct FilterBuilder<'a> {
    predicates: &'a PredicateSet,
}

impl<'a> FilterBuilder<'a> {
    pub fn new(predicates: &'a PredicateSet) -> Self {
        Self { predicates }
    }

    /// Validate, resolve names and split predicates between server and client.
    ///
    /// Validation runs before any remote call. At most one label directory
    /// fetch happens per label flag in effect, and one parent lookup.
    pub async fn build<A>(&self, api: &A) -> Result<ResolvedFilter, FilterError>
    where
        A: IssueApi + ?Sized,
    {
        self.predicates.validate()?;

        let mut resolved = ResolvedFilter::default();
        self.push_direct_conditions(&mut resolved.server);
        self.resolve_labels(api, &mut resolved).await?;
        self.resolve_parent(api, &mut resolved).await?;

        if resolved.server.is_empty() {
            debug!("Server filter: none");
        } else {
            debug!("Server filter: {}", resolved.server.to_json());
        }
        debug!("Residual predicates: {:?}", resolved.residual);
        Ok(resolved)
    }

    fn push_direct_conditions(&self, server: &mut ServerFilter) {
        let p = self.predicates;

        match &p.assignee {
            Some(Assignee::Me) => server.push(FieldCondition::AssigneeIsMe),
            Some(Assignee::Email(email)) => {
                server.push(FieldCondition::AssigneeEmail(email.clone()))
            }
            None => {}
        }

        if let Some(state) = &p.state {
            server.push(FieldCondition::StateName(state.clone()));
        } else if !p.include_completed {
            server.push(FieldCondition::StateTypeNotIn(
                StateType::TERMINAL
                    .iter()
                    .map(|state| state.as_str().to_string())
                    .collect(),
            ));
        }

        if let Some(team) = &p.team {
            server.push(FieldCondition::TeamKey(team.clone()));
        }
        if let Some(priority) = p.priority {
            server.push(FieldCondition::Priority(priority));
        }
        if let Some(created_after) = &p.created_after {
            server.push(FieldCondition::CreatedAtOrAfter(created_after.clone()));
        }
        if let Some(project) = &p.project_id {
            server.push(FieldCondition::ProjectId(project.clone()));
        }
    }

    async fn resolve_labels<A>(
        &self,
        api: &A,
        resolved: &mut ResolvedFilter,
    ) -> Result<(), FilterError>
    where
        A: IssueApi + ?Sized,
    {
        match LabelPlan::from_predicates(self.predicates) {
            LabelPlan::Unfiltered => {}
            LabelPlan::AllOf {
                names,
                overrides_others,
            } => {
                if overrides_others {
                    resolved.warnings.push(FilterWarning::LabelAllOverrides);
                }
                let ids = resolve_label_ids(api, names).await?;
                if !ids.is_empty() {
                    resolved
                        .server
                        .push(FieldCondition::Labels(LabelCondition::AllOf(ids.clone())));
                    resolved.residual.label_all = ids;
                }
            }
            LabelPlan::AnyOrNot {
                any,
                not,
                unlabeled,
            } => {
                // unknown names fail even when --unlabeled discards them below
                let any_ids = match any {
                    Some(names) => resolve_label_ids(api, names).await?,
                    None => Vec::new(),
                };
                let not_ids = match not {
                    Some(names) => resolve_label_ids(api, names).await?,
                    None => Vec::new(),
                };

                if unlabeled {
                    if !any_ids.is_empty() || !not_ids.is_empty() {
                        resolved.warnings.push(FilterWarning::UnlabeledOverrides);
                    }
                    resolved.residual.unlabeled = true;
                    return Ok(());
                }

                if !any_ids.is_empty() {
                    resolved
                        .server
                        .push(FieldCondition::Labels(LabelCondition::AnyOf(any_ids.clone())));
                    resolved.residual.label_any = any_ids;
                }
                if !not_ids.is_empty() {
                    resolved
                        .server
                        .push(FieldCondition::Labels(LabelCondition::NoneOf(not_ids.clone())));
                    resolved.residual.label_not = not_ids;
                }
            }
        }

        Ok(())
    }

    async fn resolve_parent<A>(
        &self,
        api: &A,
        resolved: &mut ResolvedFilter,
    ) -> Result<(), FilterError>
    where
        A: IssueApi + ?Sized,
    {
        let p = self.predicates;

        resolved.residual.parent = if let Some(identifier) = &p.parent {
            let id = resolve_parent_id(api, identifier).await?;
            resolved.server.push(FieldCondition::ParentId(id.clone()));
            ParentConstraint::Id(id)
        } else if p.has_parent {
            ParentConstraint::HasParent
        } else if p.no_parent {
            ParentConstraint::NoParent
        } else {
            ParentConstraint::Any
        };

        Ok(())
    }
}
