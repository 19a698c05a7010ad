//
//  atlassian-cli
//  api/jira/issues.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Jira issue, comment, and transition types.
//!
//! # Overview
//!
//! The read shapes ([`Issue`] and everything it owns) mirror what the server
//! returns from `GET /rest/api/2/issue/{key}`: every nested reference is
//! optional because the `fields` parameter can project any subset. The write
//! shapes ([`CreateIssueRequest`], [`UpdateIssueRequest`],
//! [`AssignIssueRequest`], [`TransitionIssueRequest`], [`AddCommentRequest`])
//! never carry read-only fields like `id`, `key`, or `self`.
//!
//! # Example
//!
//! ```rust
//! use atlassian_cli::api::jira::{CreateIssueFields, CreateIssueRequest, IssueTypeName, ProjectKey};
//!
//! let request = CreateIssueRequest {
//!     fields: CreateIssueFields {
//!         project: ProjectKey { key: "PROJ".to_string() },
//!         summary: "Title".to_string(),
//!         issuetype: IssueTypeName { name: "Bug".to_string() },
//!         description: None,
//!         priority: None,
//!         labels: vec![],
//!     },
//! };
//! ```

use serde::{Deserialize, Serialize};

/// A Jira issue as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Internal numeric identifier, as a string on the wire.
    #[serde(default)]
    pub id: String,

    /// Human-readable key, e.g. `PROJ-123`.
    #[serde(default)]
    pub key: String,

    /// URL of this issue resource.
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// The issue's field values.
    #[serde(default)]
    pub fields: IssueFields,
}

/// Field values of an issue.
///
/// Every reference is optional: responses only include what the request's
/// field projection asked for, and new server versions add fields freely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssueFields {
    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The issue type (Bug, Task, Story, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuetype: Option<IssueType>,

    /// The project the issue belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,

    /// Current workflow status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// The user the issue is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    /// The user who reported the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<User>,

    /// Issue priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Labels attached to the issue.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// ISO 8601 last-update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Comments, when the `comment` field was expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentContainer>,
}

/// Issue type read shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    #[serde(default)]
    pub id: String,

    /// Display name, e.g. `Bug`.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this type is a sub-task type.
    #[serde(default)]
    pub subtask: bool,
}

/// Project read shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,

    /// Project key, e.g. `PROJ`.
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Workflow status of an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, e.g. `In Progress`.
    #[serde(default)]
    pub name: String,

    /// The broad category this status belongs to.
    #[serde(
        default,
        rename = "statusCategory",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_category: Option<StatusCategory>,
}

/// Category grouping for statuses (`new`, `indeterminate`, `done`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Stable key: `new`, `indeterminate`, or `done`.
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub name: String,
}

/// A Jira user reference as it appears in issue fields and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Cloud account identifier.
    #[serde(default, rename = "accountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Server/DC username. Cloud responses omit this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable display name.
    #[serde(default, rename = "displayName")]
    pub display_name: String,

    #[serde(
        default,
        rename = "emailAddress",
        skip_serializing_if = "Option::is_none"
    )]
    pub email_address: Option<String>,

    #[serde(default)]
    pub active: bool,
}

/// Issue priority read shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, e.g. `High`.
    #[serde(default)]
    pub name: String,
}

/// Container for an issue's comments, with Jira's comment paging fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentContainer {
    /// Comments in server response order.
    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default, rename = "startAt")]
    pub start_at: u32,

    #[serde(default, rename = "maxResults")]
    pub max_results: u32,

    #[serde(default)]
    pub total: u32,
}

/// A single issue comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: String,

    /// The comment's author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,

    /// Comment text.
    #[serde(default)]
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// A workflow transition available for an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Transition identifier, as a string on the wire.
    #[serde(default)]
    pub id: String,

    /// Display name, e.g. `Start Progress`.
    #[serde(default)]
    pub name: String,

    /// The status the issue will move to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Status>,
}

/// Response shape of `GET /issue/{key}/transitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// Response shape of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, rename = "startAt")]
    pub start_at: u32,

    #[serde(default, rename = "maxResults")]
    pub max_results: u32,

    #[serde(default)]
    pub total: u32,

    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Request payload for creating an issue.
///
/// Write-only shape: never carries `id`, `key`, or `self`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub fields: CreateIssueFields,
}

/// Fields of a create-issue request.
///
/// Uses key-only and name-only references ([`ProjectKey`],
/// [`IssueTypeName`]); Jira rejects the full read shapes here.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueFields {
    /// Target project, referenced by key only.
    pub project: ProjectKey,

    /// One-line summary.
    pub summary: String,

    /// Issue type, referenced by name only.
    pub issuetype: IssueTypeName,

    /// Optional long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional priority, referenced by name only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityName>,

    /// Labels to attach at creation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Key-only project reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectKey {
    pub key: String,
}

/// Name-only issue type reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct IssueTypeName {
    pub name: String,
}

/// Name-only priority reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityName {
    pub name: String,
}

/// Request payload for editing issue fields (`PUT /issue/{key}`).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateIssueRequest {
    pub fields: UpdateIssueFields,
}

/// Fields of an update-issue request; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIssueFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityName>,
}

/// Request payload for `PUT /issue/{key}/assignee`.
///
/// Cloud expects `accountId`; passing `None` unassigns the issue, which is
/// why the field serializes even when absent.
#[derive(Debug, Clone, Serialize)]
pub struct AssignIssueRequest {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
}

/// Request payload for `POST /issue/{key}/transitions`.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionIssueRequest {
    pub transition: TransitionId,
}

/// Id-only transition reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionId {
    pub id: String,
}

/// Request payload for `POST /issue/{key}/comment`.
#[derive(Debug, Clone, Serialize)]
pub struct AddCommentRequest {
    pub body: String,
}

/// Response shape of a successful issue creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedIssue {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub key: String,

    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}
