// ABOUTME: Issue filter engine: predicate validation, name resolution and client-side post-filtering
// ABOUTME: Splits user predicates into a server filter and residual checks applied after each fetch

pub mod builder;
pub mod error;
pub mod payload;
pub mod post_filter;
pub mod predicates;
pub mod resolver;
pub mod suggest;
pub mod time_window;

pub use builder::{FilterBuilder, FilterWarning, ResolvedFilter};
pub use error::FilterError;
pub use payload::{Comparison, FieldCondition, LabelCondition, ServerFilter};
pub use post_filter::{ParentConstraint, ResidualPredicates, post_filter};
pub use predicates::{Assignee, FilterDefaults, PredicateSet};
pub use resolver::{NameDirectory, parse_name_list, resolve_label_ids, resolve_parent_id};
pub use suggest::{closest_matches, levenshtein};
pub use time_window::parse_newer_than;
