//
//  atlassian-cli
//  auth/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Authentication credentials.
//!
//! Atlassian instances accept either HTTP basic auth (username plus API
//! token, the Cloud convention for Jira and Confluence) or a bearer token
//! (personal access tokens on Server/Data Center). Credentials are supplied
//! via configuration or environment; this crate does not store them.

use reqwest::RequestBuilder;

/// A credential applied to outgoing requests.
#[derive(Debug, Clone)]
pub enum AuthCredential {
    /// HTTP basic auth with a username and an API token.
    Basic {
        username: String,
        /// API token or password.
        secret: String,
    },

    /// Bearer token (personal access token on Server/DC).
    Bearer {
        token: String,
    },
}

impl AuthCredential {
    /// Builds a basic-auth credential.
    pub fn basic(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Builds a bearer-token credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Attaches the appropriate `Authorization` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, secret } => request.basic_auth(username, Some(secret)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}
