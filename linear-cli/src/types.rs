// ABOUTME: Type definitions and enums for the Linear CLI
// ABOUTME: Models workflow state types, including the terminal ones hidden by default

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateType {
    Triage,
    Backlog,
    Unstarted,
    Started,
    Completed,
    Canceled,
    Unknown(String),
}

impl StateType {
    /// Lifecycle states excluded from listings unless completed items are requested.
    pub const TERMINAL: [StateType; 2] = [StateType::Completed, StateType::Canceled];

    pub fn as_str(&self) -> &str {
        match self {
            StateType::Triage => "triage",
            StateType::Backlog => "backlog",
            StateType::Unstarted => "unstarted",
            StateType::Started => "started",
            StateType::Completed => "completed",
            StateType::Canceled => "canceled",
            StateType::Unknown(s) => s,
        }
    }
}

impl From<&str> for StateType {
    fn from(s: &str) -> Self {
        match s {
            "triage" => StateType::Triage,
            "backlog" => StateType::Backlog,
            "unstarted" => StateType::Unstarted,
            "started" => StateType::Started,
            "completed" => StateType::Completed,
            "canceled" => StateType::Canceled,
            other => StateType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
