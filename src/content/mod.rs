//
//  atlassian-cli
//  content/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Content Resolution for Long-Form Text Options
//!
//! Every command that accepts large text (issue descriptions, page bodies,
//! comments) takes the same pair of mutually exclusive options: an inline
//! value and a file path. This module centralizes the resolution rules so
//! they cannot drift between commands:
//!
//! - Supplying both sources is always an error, naming both options.
//! - The required variant ([`resolve_required`]) errors when neither source
//!   is supplied; the optional variant ([`resolve_optional`]) returns `None`.
//! - A file source must exist; the whole file is read as UTF-8 and returned
//!   verbatim, with no trimming or line-ending normalization.
//! - An empty string counts as "not supplied" for either source.
//!
//! Option names vary per command (`--description`/`--description-file` vs
//! `--body`/`--body-file`), so both resolvers are parameterized by the labels
//! used in their error text.
//!
//! # Example
//!
//! ```rust
//! use atlassian_cli::content::{resolve_optional, resolve_required, ContentError};
//!
//! let text = resolve_required(
//!     Some("Fix bug"),
//!     None,
//!     "--description",
//!     "--description-file",
//! )
//! .unwrap();
//! assert_eq!(text, "Fix bug");
//!
//! let absent = resolve_optional(None, None, "--body", "--body-file").unwrap();
//! assert!(absent.is_none());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while resolving long-form text content.
///
/// Each variant is a distinct condition so command handlers can map it to a
/// precise message and exit code. The resolver never logs or swallows an
/// error; presentation is entirely the caller's concern.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Both the inline option and the file option were supplied.
    #[error("{inline_option} and {file_option} are mutually exclusive; supply only one")]
    ConflictingSources {
        /// Label of the inline option (e.g. `--description`).
        inline_option: String,
        /// Label of the file option (e.g. `--description-file`).
        file_option: String,
    },

    /// Required content had neither source.
    #[error("one of {inline_option} or {file_option} is required")]
    MissingSource {
        /// Label of the inline option.
        inline_option: String,
        /// Label of the file option.
        file_option: String,
    },

    /// The file option pointed at a path that does not exist.
    #[error("content file not found: {path}")]
    SourceNotFound {
        /// The path that was supplied.
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read content file {path}")]
    Unreadable {
        /// The path that was supplied.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Resolves required content from exactly one of two sources.
///
/// # Parameters
///
/// * `direct` - The inline value, if the user supplied one
/// * `file` - The file path, if the user supplied one
/// * `inline_option` - Option label used in error messages
/// * `file_option` - Option label used in error messages
///
/// # Errors
///
/// * [`ContentError::ConflictingSources`] when both sources are present
/// * [`ContentError::MissingSource`] when neither source is present
/// * [`ContentError::SourceNotFound`] when the file does not exist
/// * [`ContentError::Unreadable`] when the file exists but cannot be read
pub fn resolve_required(
    direct: Option<&str>,
    file: Option<&str>,
    inline_option: &str,
    file_option: &str,
) -> Result<String, ContentError> {
    match resolve_optional(direct, file, inline_option, file_option)? {
        Some(content) => Ok(content),
        None => Err(ContentError::MissingSource {
            inline_option: inline_option.to_string(),
            file_option: file_option.to_string(),
        }),
    }
}

/// Resolves optional content from at most one of two sources.
///
/// Identical to [`resolve_required`] except that the absence of both sources
/// is not an error: it returns `Ok(None)`, letting the caller distinguish
/// "no content requested" from "empty content requested". The
/// conflicting-sources check still applies.
pub fn resolve_optional(
    direct: Option<&str>,
    file: Option<&str>,
    inline_option: &str,
    file_option: &str,
) -> Result<Option<String>, ContentError> {
    let direct = present(direct);
    let file = present(file);

    match (direct, file) {
        (Some(_), Some(_)) => Err(ContentError::ConflictingSources {
            inline_option: inline_option.to_string(),
            file_option: file_option.to_string(),
        }),
        (Some(value), None) => Ok(Some(value.to_string())),
        (None, Some(path)) => read_content_file(Path::new(path)).map(Some),
        (None, None) => Ok(None),
    }
}

/// Treats empty strings the same as absent options.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Reads a content file whole, as UTF-8, with no normalization.
fn read_content_file(path: &Path) -> Result<String, ContentError> {
    if !path.exists() {
        return Err(ContentError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ContentError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
