//
//  atlassian-cli
//  api/common/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Common API Types Shared Across All Four Products
//!
//! This module provides the types used by every product client: the unified
//! error taxonomy, the HATEOAS-style [`Link`] shape that appears throughout
//! Atlassian responses, and the Bitbucket pagination envelopes (re-exported
//! from the [`pagination`] submodule).
//!
//! # Error Handling
//!
//! All client failures surface as a distinct [`ApiError`] variant so command
//! handlers can map each condition to a specific message and exit code. The
//! client layer never retries, logs, or swallows an error.
//!
//! # Example
//!
//! ```rust
//! use atlassian_cli::api::common::ApiError;
//!
//! fn describe<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::NotFound(resource)) => println!("Not found: {resource}"),
//!         Err(ApiError::MalformedPayload { context, .. }) => {
//!             println!("Unexpected {context} response shape")
//!         }
//!         Err(e) => println!("Error: {e}"),
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Atlassian API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `AuthRequired` | No credentials configured | 401 |
/// | `AuthFailed` | Invalid or expired credentials | 401 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `RateLimited` | Too many requests | 429 |
/// | `ServerError` | Internal server error | 5xx |
/// | `MalformedPayload` | Response JSON did not match the wire model | N/A |
/// | `Network` | Transport-level failure | N/A |
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication credentials are required but not configured.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed due to invalid or expired credentials.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Access to the resource is forbidden.
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// The request was malformed or contained invalid parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// API rate limit has been exceeded.
    #[error("rate limit exceeded")]
    RateLimited,

    /// An internal error occurred on the remote server.
    #[error("server error: {0}")]
    ServerError(String),

    /// A response body did not match the expected wire shape.
    ///
    /// Raised when deserialization fails (e.g. wrong JSON type for a field).
    /// Never silently defaulted; the caller decides how to present it.
    #[error("malformed {context} payload: {source}")]
    MalformedPayload {
        /// What was being parsed (e.g. `"Jira issue"`).
        context: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A network-level error occurred during the request.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// HATEOAS-style link found throughout Atlassian API responses.
///
/// Bamboo nests these under a `link` key with a `rel` attribute; Bitbucket
/// groups them in `links` maps. The `href` is always a full URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The URL of the linked resource.
    #[serde(default)]
    pub href: String,

    /// Relationship or purpose of the link (`self`, `clone`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    /// Optional descriptive name for the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
