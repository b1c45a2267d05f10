// ABOUTME: Typed server-side issue filter and its rendering into the GraphQL filter object
// ABOUTME: Each condition names one field path and comparison; rendering merges shared paths

use serde_json::{Map, Value, json};

/// A comparison applied at the end of a field path.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Eq(Value),
    Gte(String),
    In(Vec<String>),
    Nin(Vec<String>),
}

impl Comparison {
    pub fn to_json(&self) -> Value {
        match self {
            Comparison::Eq(value) => json!({ "eq": value }),
            Comparison::Gte(value) => json!({ "gte": value }),
            Comparison::In(values) => json!({ "in": values }),
            Comparison::Nin(values) => json!({ "nin": values }),
        }
    }
}

/// Label membership conditions the server understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelCondition {
    /// Every id must be present. The server can only narrow to "has any of
    /// these", so the full check is repeated on fetched results.
    AllOf(Vec<String>),
    AnyOf(Vec<String>),
    NoneOf(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCondition {
    AssigneeIsMe,
    AssigneeEmail(String),
    StateName(String),
    StateTypeNotIn(Vec<String>),
    TeamKey(String),
    Priority(u8),
    CreatedAtOrAfter(String),
    ProjectId(String),
    Labels(LabelCondition),
    ParentId(String),
}

impl FieldCondition {
    /// Field path from the filter root down to the comparison.
    pub fn path(&self) -> &'static [&'static str] {
        match self {
            FieldCondition::AssigneeIsMe => &["assignee", "isMe"],
            FieldCondition::AssigneeEmail(_) => &["assignee", "email"],
            FieldCondition::StateName(_) => &["state", "name"],
            FieldCondition::StateTypeNotIn(_) => &["state", "type"],
            FieldCondition::TeamKey(_) => &["team", "key"],
            FieldCondition::Priority(_) => &["priority"],
            FieldCondition::CreatedAtOrAfter(_) => &["createdAt"],
            FieldCondition::ProjectId(_) => &["project", "id"],
            FieldCondition::Labels(LabelCondition::AllOf(_))
            | FieldCondition::Labels(LabelCondition::AnyOf(_)) => &["labels", "some", "id"],
            FieldCondition::Labels(LabelCondition::NoneOf(_)) => &["labels", "none", "id"],
            FieldCondition::ParentId(_) => &["parent", "id"],
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            FieldCondition::AssigneeIsMe => Comparison::Eq(json!(true)),
            FieldCondition::AssigneeEmail(value)
            | FieldCondition::StateName(value)
            | FieldCondition::TeamKey(value)
            | FieldCondition::ProjectId(value)
            | FieldCondition::ParentId(value) => Comparison::Eq(json!(value)),
            FieldCondition::Priority(priority) => Comparison::Eq(json!(priority)),
            FieldCondition::StateTypeNotIn(types) => Comparison::Nin(types.clone()),
            FieldCondition::CreatedAtOrAfter(timestamp) => Comparison::Gte(timestamp.clone()),
            FieldCondition::Labels(
                LabelCondition::AllOf(ids) | LabelCondition::AnyOf(ids) | LabelCondition::NoneOf(ids),
            ) => Comparison::In(ids.clone()),
        }
    }
}

/// Conditions the remote service evaluates, all joined by AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFilter {
    conditions: Vec<FieldCondition>,
}

impl ServerFilter {
    pub fn push(&mut self, condition: FieldCondition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render as the nested GraphQL `IssueFilter` object.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        for condition in &self.conditions {
            insert_at_path(&mut root, condition.path(), condition.comparison().to_json());
        }
        Value::Object(root)
    }
}

fn insert_at_path(root: &mut Map<String, Value>, path: &[&str], leaf: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut node = root;
    for key in parents {
        let entry = node
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        node = match entry {
            Value::Object(map) => map,
            _ => return,
        };
    }
    node.insert(last.to_string(), leaf);
}
