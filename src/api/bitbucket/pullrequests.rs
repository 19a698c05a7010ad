//
//  atlassian-cli
//  api/bitbucket/pullrequests.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket Server pull request types.
//!
//! # Overview
//!
//! A pull request proposes merging `fromRef` into `toRef`; each ref owns the
//! repository (and transitively the project) it points into. Reviewers and
//! participants wrap a [`User`] together with their role and approval state.
//!
//! Timestamps (`createdDate`, `updatedDate`) are Unix epoch milliseconds,
//! and branch ids use the full ref path format `refs/heads/branch-name`.
//!
//! The write shapes ([`CreatePullRequestRequest`],
//! [`MergePullRequestRequest`]) are distinct from the read shapes: creation
//! references repositories by slug and project key only.

use serde::{Deserialize, Serialize};

use super::repositories::Repository;

/// A pull request as returned by the Server API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PullRequest {
    /// Unique numeric identifier within the repository.
    #[serde(default)]
    pub id: u64,

    /// Entity version used for optimistic locking on writes.
    #[serde(default)]
    pub version: i32,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `OPEN`, `MERGED`, or `DECLINED`.
    #[serde(default)]
    pub state: String,

    /// Whether the pull request is open for review.
    #[serde(default)]
    pub open: bool,

    /// Whether the pull request has been merged or declined.
    #[serde(default)]
    pub closed: bool,

    /// Epoch milliseconds of creation.
    #[serde(default, rename = "createdDate")]
    pub created_date: i64,

    /// Epoch milliseconds of the last update.
    #[serde(default, rename = "updatedDate")]
    pub updated_date: i64,

    /// Source branch (the changes to merge).
    #[serde(default, rename = "fromRef")]
    pub from_ref: PullRequestRef,

    /// Target branch (where the changes land).
    #[serde(default, rename = "toRef")]
    pub to_ref: PullRequestRef,

    #[serde(default)]
    pub locked: bool,

    /// The author, wrapped with role information.
    #[serde(default)]
    pub author: Participant,

    /// Assigned reviewers.
    #[serde(default)]
    pub reviewers: Vec<Participant>,

    /// Everyone who has interacted with the pull request.
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// A branch reference inside a pull request, owning its repository.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Full ref id, e.g. `refs/heads/feature/login`.
    #[serde(default)]
    pub id: String,

    /// Short display form, e.g. `feature/login`.
    #[serde(default, rename = "displayId")]
    pub display_id: String,

    /// Commit currently at the head of the ref.
    #[serde(
        default,
        rename = "latestCommit",
        skip_serializing_if = "Option::is_none"
    )]
    pub latest_commit: Option<String>,

    /// The repository this ref lives in.
    #[serde(default)]
    pub repository: Repository,
}

/// A user's involvement in a pull request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub user: User,

    /// `AUTHOR`, `REVIEWER`, or `PARTICIPANT`.
    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub approved: bool,

    /// Review status: `UNAPPROVED`, `NEEDS_WORK`, or `APPROVED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A Bitbucket Server user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, rename = "displayName")]
    pub display_name: String,

    #[serde(
        default,
        rename = "emailAddress",
        skip_serializing_if = "Option::is_none"
    )]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default)]
    pub active: bool,
}

/// Request payload for creating a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequestRequest {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "fromRef")]
    pub from_ref: RefSpec,

    #[serde(rename = "toRef")]
    pub to_ref: RefSpec,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<ReviewerSpec>,
}

/// Write-only ref reference: full ref id plus slug/key repository path.
#[derive(Debug, Clone, Serialize)]
pub struct RefSpec {
    /// Full ref id, e.g. `refs/heads/feature/login`.
    pub id: String,

    pub repository: RepositorySpec,
}

impl RefSpec {
    /// Builds a ref spec for a branch name, adding the `refs/heads/` prefix
    /// when it is missing.
    pub fn branch(name: &str, project_key: &str, repo_slug: &str) -> Self {
        let id = if name.starts_with("refs/") {
            name.to_string()
        } else {
            format!("refs/heads/{name}")
        };
        Self {
            id,
            repository: RepositorySpec {
                slug: repo_slug.to_string(),
                project: ProjectKeySpec {
                    key: project_key.to_string(),
                },
            },
        }
    }
}

/// Slug-only repository reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct RepositorySpec {
    pub slug: String,
    pub project: ProjectKeySpec,
}

/// Key-only project reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectKeySpec {
    pub key: String,
}

/// Name-only user wrapper for assigning reviewers.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewerSpec {
    pub user: UserName,
}

/// Name-only user reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct UserName {
    pub name: String,
}

/// Request payload for merging a pull request.
///
/// Carries the entity version last read; the server rejects stale versions.
#[derive(Debug, Clone, Serialize)]
pub struct MergePullRequestRequest {
    pub version: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PR_JSON: &str = r#"{
        "id": 42,
        "version": 3,
        "title": "Add login flow",
        "description": "Implements OAuth login",
        "state": "OPEN",
        "open": true,
        "closed": false,
        "createdDate": 1767868800000,
        "updatedDate": 1767955200000,
        "fromRef": {
            "id": "refs/heads/feature/login",
            "displayId": "feature/login",
            "latestCommit": "abc123",
            "repository": {
                "slug": "my-repo",
                "name": "My Repo",
                "project": {"key": "PROJ"}
            }
        },
        "toRef": {
            "id": "refs/heads/main",
            "displayId": "main",
            "repository": {
                "slug": "my-repo",
                "name": "My Repo",
                "project": {"key": "PROJ"}
            }
        },
        "author": {
            "user": {"name": "adoe", "displayName": "Alex Doe", "active": true},
            "role": "AUTHOR",
            "approved": false
        },
        "reviewers": [
            {
                "user": {"name": "sam", "displayName": "Sam Lee", "active": true},
                "role": "REVIEWER",
                "approved": true,
                "status": "APPROVED"
            }
        ]
    }"#;

    #[test]
    fn test_pull_request_nested_ownership() {
        let pr: PullRequest = serde_json::from_str(PR_JSON).unwrap();
        assert_eq!(pr.id, 42);
        assert!(pr.open);
        assert!(!pr.closed);
        assert_eq!(pr.from_ref.display_id, "feature/login");
        assert_eq!(
            pr.from_ref
                .repository
                .project
                .as_ref()
                .unwrap()
                .key,
            "PROJ"
        );
        assert_eq!(pr.reviewers[0].status.as_deref(), Some("APPROVED"));
        assert!(pr.reviewers[0].approved);
        assert!(pr.participants.is_empty());
    }

    #[test]
    fn test_sparse_pull_request_defaults() {
        // Projections and older servers can omit almost everything; absent
        // fields default instead of failing deserialization.
        let pr: PullRequest = serde_json::from_str(r#"{"id": 7, "title": "Draft"}"#).unwrap();
        assert_eq!(pr.id, 7);
        assert_eq!(pr.version, 0);
        assert_eq!(pr.from_ref.id, "");
        assert_eq!(pr.from_ref.repository.scm_id, "git");
        assert_eq!(pr.author.user.name, "");
        assert!(pr.reviewers.is_empty());
    }

    #[test]
    fn test_pull_request_round_trip() {
        let pr: PullRequest = serde_json::from_str(PR_JSON).unwrap();
        let round: PullRequest =
            serde_json::from_str(&serde_json::to_string(&pr).unwrap()).unwrap();
        assert_eq!(round, pr);
    }

    #[test]
    fn test_create_request_uses_bare_references() {
        let request = CreatePullRequestRequest {
            title: "Add login flow".to_string(),
            description: None,
            from_ref: RefSpec::branch("feature/login", "PROJ", "my-repo"),
            to_ref: RefSpec::branch("main", "PROJ", "my-repo"),
            reviewers: vec![ReviewerSpec {
                user: UserName {
                    name: "sam".to_string(),
                },
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fromRef"]["id"], "refs/heads/feature/login");
        assert_eq!(value["fromRef"]["repository"]["slug"], "my-repo");
        assert_eq!(value["fromRef"]["repository"]["project"]["key"], "PROJ");
        assert_eq!(value["reviewers"][0]["user"]["name"], "sam");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_ref_spec_keeps_explicit_ref_path() {
        let spec = RefSpec::branch("refs/tags/v1.0", "PROJ", "my-repo");
        assert_eq!(spec.id, "refs/tags/v1.0");
    }

    #[test]
    fn test_merge_request_carries_version() {
        let request = MergePullRequestRequest { version: 3 };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"version":3}"#);
    }
}
