//
//  atlassian-cli
//  lib.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! # Atlassian CLI Library
//!
//! A command-line interface library for working with the four Atlassian
//! products from one terminal tool: Jira, Confluence, Bamboo, and Bitbucket.
//!
//! ## Overview
//!
//! This library provides the core functionality for the `atl` CLI tool. Each
//! product gets its own typed wire-model family and command group; everything
//! they share (HTTP client, authentication, pagination envelopes, error
//! taxonomy, content resolution) lives in common modules.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: Typed wire models per product plus the shared HTTP client
//! - [`auth`]: Credential shapes (basic and bearer)
//! - [`config`]: Configuration file management
//! - [`content`]: Inline-vs-file resolution for long-form text options
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Platform Differences
//!
//! | Concern | Jira | Confluence | Bamboo | Bitbucket |
//! |---------|------|------------|--------|-----------|
//! | Pagination | `startAt`/`total` | `start`/`limit` | `start-index`/`max-result` | Server and Cloud pages |
//! | Writes | field wrappers | version + 1 | queue POST | entity version |
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use atlassian_cli::api::{AtlassianClient, Product};
//!
//! let client = AtlassianClient::new(Product::Jira, "https://jira.example.com".to_string())
//!     .expect("client");
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod content;
pub mod output;

pub use cli::Cli;
pub use config::Config;

/// Name of the CLI binary, used for display and configuration paths.
pub const APP_NAME: &str = "atl";

/// Current version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts to
/// programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use crate::api::common::ApiError;
    use crate::content::ContentError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error; check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist or is not accessible.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;

    /// Maps an error chain to its exit code.
    ///
    /// Walks the chain looking for the typed errors this crate produces;
    /// anything unrecognized falls back to [`ERROR`].
    pub fn for_error(error: &anyhow::Error) -> i32 {
        for cause in error.chain() {
            if let Some(api) = cause.downcast_ref::<ApiError>() {
                return match api {
                    ApiError::AuthRequired | ApiError::AuthFailed(_) => AUTH_ERROR,
                    ApiError::NotFound(_) | ApiError::Forbidden(_) => NOT_FOUND,
                    ApiError::RateLimited => RATE_LIMIT,
                    _ => ERROR,
                };
            }
            if let Some(content) = cause.downcast_ref::<ContentError>() {
                return match content {
                    ContentError::ConflictingSources { .. }
                    | ContentError::MissingSource { .. } => USAGE,
                    ContentError::SourceNotFound { .. } | ContentError::Unreadable { .. } => {
                        NOT_FOUND
                    }
                };
            }
        }
        ERROR
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_auth_errors_map_to_auth_code() {
            let error = anyhow::Error::new(ApiError::AuthRequired);
            assert_eq!(for_error(&error), AUTH_ERROR);
        }

        #[test]
        fn test_not_found_maps_through_context() {
            let error = anyhow::Error::new(ApiError::NotFound("PROJ-1".to_string()))
                .context("viewing issue");
            assert_eq!(for_error(&error), NOT_FOUND);
        }

        #[test]
        fn test_conflicting_sources_is_usage() {
            let error = anyhow::Error::new(ContentError::ConflictingSources {
                inline_option: "--body".to_string(),
                file_option: "--body-file".to_string(),
            });
            assert_eq!(for_error(&error), USAGE);
        }

        #[test]
        fn test_unknown_error_falls_back() {
            let error = anyhow::anyhow!("something else");
            assert_eq!(for_error(&error), ERROR);
        }
    }
}
