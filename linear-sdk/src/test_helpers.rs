// ABOUTME: Test helper utilities for mocking Linear API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

#[cfg(test)]
use mockito::{Server, ServerGuard};
#[cfg(test)]
use serde_json::json;

#[cfg(test)]
pub async fn mock_linear_server() -> ServerGuard {
    Server::new_async().await
}

#[cfg(test)]
pub fn mock_issue_labels_response() -> serde_json::Value {
    json!({
        "data": {
            "issueLabels": {
                "nodes": [
                    { "id": "L_bug", "name": "Bug", "color": "#f00" },
                    { "id": "L_backend", "name": "Backend", "color": "#0f0" },
                    { "id": "L_frontend", "name": "Frontend", "color": "#00f" }
                ]
            }
        }
    })
}

#[cfg(test)]
pub fn mock_parent_issue_response() -> serde_json::Value {
    json!({
        "data": {
            "issue": {
                "id": "issue-parent-uuid",
                "identifier": "ENG-100",
                "title": "Epic: authentication rework",
                "state": { "name": "In Progress", "type": "started" },
                "assignee": null,
                "team": { "key": "ENG", "name": "Engineering" },
                "project": null,
                "labels": { "nodes": [] },
                "parent": null,
                "priority": 2.0,
                "priorityLabel": "High",
                "createdAt": "2024-01-15T10:30:00Z",
                "updatedAt": "2024-01-16T14:45:00Z",
                "url": "https://linear.app/test/issue/ENG-100"
            }
        }
    })
}

#[cfg(test)]
pub fn mock_issues_response() -> serde_json::Value {
    json!({
        "data": {
            "issues": {
                "pageInfo": { "hasNextPage": true, "endCursor": "cursor-3" },
                "nodes": [
                    {
                        "id": "issue-1",
                        "identifier": "ENG-101",
                        "title": "Login fails on Safari",
                        "state": { "name": "Todo", "type": "unstarted" },
                        "assignee": { "name": "Alice", "email": "alice@example.com" },
                        "team": { "key": "ENG", "name": "Engineering" },
                        "labels": { "nodes": [{ "id": "L_bug", "name": "Bug" }] },
                        "parent": null,
                        "createdAt": "2024-02-01T09:00:00Z"
                    },
                    {
                        "id": "issue-2",
                        "identifier": "ENG-102",
                        "title": "Token refresh endpoint",
                        "state": { "name": "In Progress", "type": "started" },
                        "assignee": { "name": "Bob", "email": "bob@example.com" },
                        "team": { "key": "ENG", "name": "Engineering" },
                        "labels": {
                            "nodes": [
                                { "id": "L_bug", "name": "Bug" },
                                { "id": "L_backend", "name": "Backend" }
                            ]
                        },
                        "parent": {
                            "id": "issue-parent-uuid",
                            "identifier": "ENG-100",
                            "title": "Epic: authentication rework"
                        },
                        "createdAt": "2024-02-02T09:00:00Z"
                    },
                    {
                        "id": "issue-3",
                        "identifier": "ENG-103",
                        "title": "Write onboarding docs",
                        "state": { "name": "Backlog", "type": "backlog" },
                        "assignee": null,
                        "team": { "key": "ENG", "name": "Engineering" },
                        "labels": { "nodes": [] },
                        "parent": null,
                        "createdAt": "2024-02-03T09:00:00Z"
                    }
                ]
            }
        }
    })
}

#[cfg(test)]
pub fn mock_search_issues_response() -> serde_json::Value {
    json!({
        "data": {
            "searchIssues": {
                "pageInfo": { "hasNextPage": false, "endCursor": null },
                "nodes": [
                    {
                        "id": "issue-1",
                        "identifier": "ENG-101",
                        "title": "Login fails on Safari",
                        "labels": { "nodes": [{ "id": "L_bug", "name": "Bug" }] },
                        "parent": null
                    }
                ]
            }
        }
    })
}

#[cfg(test)]
pub fn mock_issue_not_found_response() -> serde_json::Value {
    json!({
        "data": {
            "issue": null
        }
    })
}

#[cfg(test)]
pub fn mock_error_response() -> serde_json::Value {
    json!({
        "errors": [
            {
                "message": "Authentication required",
                "extensions": {
                    "code": "UNAUTHENTICATED"
                }
            }
        ]
    })
}

#[cfg(test)]
pub fn mock_graphql_error_response() -> serde_json::Value {
    json!({
        "errors": [
            {
                "message": "Cannot query field 'unknown' on type 'Query'",
                "locations": [
                    {
                        "line": 2,
                        "column": 3
                    }
                ],
                "extensions": {
                    "code": "GRAPHQL_VALIDATION_FAILED"
                }
            }
        ]
    })
}
