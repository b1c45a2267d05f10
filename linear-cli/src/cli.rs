// ABOUTME: CLI argument definitions for Linear CLI application
// ABOUTME: Defines the issue listing and search commands with their shared filter flags

use clap::{Args, Parser, Subcommand, ValueEnum};
use linear_sdk::OrderBy;

#[derive(Parser, Debug)]
#[command(name = "linear")]
#[command(about = "A CLI for Linear", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Force colored output even when piped
    #[arg(long, global = true, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List issues
    #[command(visible_alias = "ls")]
    Issues {
        #[command(flatten)]
        filters: IssueFilterArgs,

        #[command(flatten)]
        output: ListArgs,
    },
    /// Search issues by keyword
    #[command(visible_alias = "find")]
    Search {
        /// Search query (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Include archived issues
        #[arg(long)]
        include_archived: bool,

        #[command(flatten)]
        filters: IssueFilterArgs,

        #[command(flatten)]
        output: ListArgs,
    },
}

/// Filter flags shared by `issues` and `search`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilterArgs {
    /// Filter by assignee email (use "me" for yourself)
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Filter by state name (e.g. "In Progress")
    #[arg(short, long)]
    pub state: Option<String>,

    /// Filter by team key (e.g. ENG)
    #[arg(short, long)]
    pub team: Option<String>,

    /// Filter by priority (0=None, 1=Urgent, 2=High, 3=Normal, 4=Low)
    #[arg(short = 'r', long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub priority: Option<u8>,

    /// Include completed and canceled issues
    #[arg(short = 'c', long)]
    pub include_completed: bool,

    /// Only issues created after this time (N_unit_ago, YYYY-MM-DD, RFC3339 or all_time)
    #[arg(short = 'n', long, value_name = "WHEN")]
    pub newer_than: Option<String>,

    /// Filter by project ID (UUID)
    #[arg(long, value_name = "UUID")]
    pub project: Option<String>,

    /// Require all of these labels (comma-separated names)
    #[arg(long, value_name = "NAMES")]
    pub label: Option<String>,

    /// Require any of these labels (comma-separated names)
    #[arg(long, value_name = "NAMES")]
    pub label_any: Option<String>,

    /// Exclude issues with any of these labels (comma-separated names)
    #[arg(long, value_name = "NAMES")]
    pub label_not: Option<String>,

    /// Only issues without labels
    #[arg(long)]
    pub unlabeled: bool,

    /// Only sub-issues of this parent (e.g. ENG-123)
    #[arg(long, value_name = "IDENTIFIER")]
    pub parent: Option<String>,

    /// Only issues that have a parent
    #[arg(long)]
    pub has_parent: bool,

    /// Only issues without a parent
    #[arg(long)]
    pub no_parent: bool,
}

/// Result size, ordering and output format.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Maximum number of issues to fetch [default: 50]
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
    pub limit: Option<i32>,

    /// Sort order
    #[arg(short = 'o', long, value_enum, default_value_t = SortOrder::Linear)]
    pub sort: SortOrder,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Linear's default ordering
    #[default]
    Linear,
    /// Newest first
    #[value(alias = "createdAt")]
    Created,
    /// Most recently updated first
    #[value(alias = "updatedAt")]
    Updated,
}

impl SortOrder {
    pub fn order_by(self) -> Option<OrderBy> {
        match self {
            SortOrder::Linear => None,
            SortOrder::Created => Some(OrderBy::CreatedAt),
            SortOrder::Updated => Some(OrderBy::UpdatedAt),
        }
    }
}
