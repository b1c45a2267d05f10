// ABOUTME: This module handles output formatting for the Linear CLI
// ABOUTME: Renders issue pages as a colored table with label and parent columns, or as JSON

use anyhow::Result;
use linear_sdk::Issue;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants::ui::{LABELS_MAX_LEN, MAX_LABELS_SHOWN, TITLE_MAX_LEN};
use crate::types::StateType;

pub trait OutputFormat {
    fn format_issues(&self, issues: &[Issue]) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn format_state(&self, issue: &Issue) -> String {
        let Some(state) = &issue.state else {
            return "-".to_string();
        };

        if !self.use_color {
            return state.name.clone();
        }

        match StateType::from(state.state_type.as_str()) {
            StateType::Triage | StateType::Backlog | StateType::Unstarted => {
                state.name.dimmed().to_string()
            }
            StateType::Started => state.name.yellow().to_string(),
            StateType::Completed => state.name.green().to_string(),
            StateType::Canceled => state.name.red().to_string(),
            StateType::Unknown(_) => state.name.clone(),
        }
    }

    fn format_assignee(&self, issue: &Issue) -> String {
        match &issue.assignee {
            Some(user) => user.name.clone(),
            None if self.use_color => "Unassigned".dimmed().to_string(),
            None => "Unassigned".to_string(),
        }
    }

    fn format_parent(&self, issue: &Issue) -> String {
        match &issue.parent {
            Some(parent) if !parent.identifier.is_empty() => parent.identifier.clone(),
            _ if self.use_color => "-".dimmed().to_string(),
            _ => "-".to_string(),
        }
    }

    fn format_labels(&self, issue: &Issue) -> String {
        let labels = issue.label_nodes();
        if labels.is_empty() {
            return String::new();
        }

        let mut text = labels
            .iter()
            .take(MAX_LABELS_SHOWN)
            .map(|label| label.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if labels.len() > MAX_LABELS_SHOWN {
            text.push_str(&format!(" +{}", labels.len() - MAX_LABELS_SHOWN));
        }

        let text = truncate(&text, LABELS_MAX_LEN);
        if self.use_color {
            text.cyan().to_string()
        } else {
            text
        }
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_issues(&self, issues: &[Issue]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(issues)?)
        } else {
            Ok(serde_json::to_string(issues)?)
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Issue")]
    issue: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Labels")]
    labels: String,
}

impl OutputFormat for TableFormatter {
    fn format_issues(&self, issues: &[Issue]) -> Result<String> {
        let rows: Vec<TableRow> = issues
            .iter()
            .map(|issue| TableRow {
                issue: issue.identifier.clone(),
                title: truncate(&issue.title, TITLE_MAX_LEN),
                state: self.format_state(issue),
                assignee: self.format_assignee(issue),
                parent: self.format_parent(issue),
                labels: self.format_labels(issue),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }
}
