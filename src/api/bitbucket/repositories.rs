//
//  atlassian-cli
//  api/bitbucket/repositories.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket Server repository, project, and commit types.

use serde::{Deserialize, Serialize};

use crate::api::common::Link;

fn default_scm_id() -> String {
    "git".to_string()
}

/// A Bitbucket Server project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project key, e.g. `PROJ`.
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub public: bool,
}

/// A repository within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// URL slug of the repository.
    #[serde(default)]
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: String,

    /// SCM backend; defaults to `git` when the server omits it.
    #[serde(rename = "scmId", default = "default_scm_id")]
    pub scm_id: String,

    /// Repository state, e.g. `AVAILABLE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default)]
    pub forkable: bool,

    #[serde(default)]
    pub public: bool,

    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RepositoryLinks>,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            slug: String::new(),
            id: None,
            name: String::new(),
            scm_id: default_scm_id(),
            state: None,
            forkable: false,
            public: false,
            project: None,
            links: None,
        }
    }
}

/// Link groups attached to a repository.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepositoryLinks {
    /// Clone URLs (`http`, `ssh`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clone: Vec<Link>,

    /// Links to the repository itself.
    #[serde(default, rename = "self", skip_serializing_if = "Vec::is_empty")]
    pub self_links: Vec<Link>,
}

/// Request payload for creating a repository.
///
/// `scmId` is always emitted; Bitbucket only supports `git` for new
/// repositories but the field is part of the write contract.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepositoryRequest {
    pub name: String,

    #[serde(rename = "scmId")]
    pub scm_id: String,

    pub forkable: bool,
}

impl CreateRepositoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scm_id: default_scm_id(),
            forkable: true,
        }
    }
}

/// A commit as returned by the Server API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Full SHA-1 hash.
    #[serde(default)]
    pub id: String,

    /// Abbreviated hash for display.
    #[serde(default, rename = "displayId")]
    pub display_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<CommitAuthor>,

    /// Epoch milliseconds of the author timestamp.
    #[serde(default, rename = "authorTimestamp")]
    pub author_timestamp: i64,
}

/// Author identity attached to a commit; not necessarily a Bitbucket user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub name: String,

    #[serde(
        default,
        rename = "emailAddress",
        skip_serializing_if = "Option::is_none"
    )]
    pub email_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_scm_defaults_to_git() {
        let repo: Repository =
            serde_json::from_str(r#"{"slug": "my-repo", "name": "My Repo"}"#).unwrap();
        assert_eq!(repo.scm_id, "git");
    }

    #[test]
    fn test_sparse_repository_defaults() {
        let repo: Repository = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(repo.slug, "");
        assert_eq!(repo.scm_id, "git");

        let commit: Commit = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(commit.id, "");
    }

    #[test]
    fn test_repository_full_shape() {
        let json = r#"{
            "slug": "my-repo",
            "id": 7,
            "name": "My Repo",
            "scmId": "git",
            "state": "AVAILABLE",
            "forkable": true,
            "public": false,
            "project": {"key": "PROJ", "id": 1, "name": "Project"},
            "links": {
                "clone": [
                    {"href": "https://bitbucket.example.com/scm/proj/my-repo.git", "name": "http"},
                    {"href": "ssh://git@bitbucket.example.com/proj/my-repo.git", "name": "ssh"}
                ],
                "self": [{"href": "https://bitbucket.example.com/projects/PROJ/repos/my-repo/browse"}]
            }
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.project.as_ref().unwrap().key, "PROJ");
        assert_eq!(repo.links.as_ref().unwrap().clone.len(), 2);

        let round: Repository =
            serde_json::from_str(&serde_json::to_string(&repo).unwrap()).unwrap();
        assert_eq!(round, repo);
    }

    #[test]
    fn test_create_repository_request_shape() {
        let request = CreateRepositoryRequest::new("new-repo");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"new-repo","scmId":"git","forkable":true}"#
        );
    }

    #[test]
    fn test_commit_wire_names() {
        let json = r#"{
            "id": "abc123def4567890abc123def4567890abc123de",
            "displayId": "abc123d",
            "message": "Fix bug",
            "author": {"name": "Alex Doe", "emailAddress": "alex@example.com"},
            "authorTimestamp": 1767868800000
        }"#;
        let commit: Commit = serde_json::from_str(json).unwrap();
        assert_eq!(commit.display_id, "abc123d");
        assert_eq!(commit.author_timestamp, 1767868800000);
    }
}
