//
//  atlassian-cli
//  api/common/pagination.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Pagination Envelopes for Bitbucket API Responses
//!
//! Bitbucket Cloud and Bitbucket Server/Data Center paginate differently,
//! and both shapes repeat across every list endpoint, so each is modeled
//! once as a generic envelope.
//!
//! | Type | Platform | Strategy |
//! |------|----------|----------|
//! | [`CloudPage`] | Cloud | URL-based (next/previous links) |
//! | [`ServerPage`] | Server/DC | Offset-based (start index) |
//!
//! **Cloud** responses carry a complete `next` URL; iterate until it is
//! absent. **Server** responses carry `isLastPage` and `nextPageStart`;
//! request the next page with `start=nextPageStart` until `isLastPage` is
//! `true`.
//!
//! The Bamboo pagination envelope (`size`/`start-index`/`max-result`) is a
//! different wire contract and lives in [`crate::api::bamboo`].

use serde::{Deserialize, Serialize};

/// Paginated response from the Bitbucket Cloud API (v2.0).
///
/// Cloud uses URL-based pagination: each page includes complete URLs for the
/// next and previous pages. The `size` field may be omitted by the server on
/// large result sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudPage<T> {
    /// Items in the current page. May be empty.
    #[serde(default)]
    pub values: Vec<T>,

    /// Current page number (1-indexed). Absent under cursor pagination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagelen: Option<u32>,

    /// Total number of items across all pages, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Complete URL of the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Complete URL of the previous page, absent on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl<T> CloudPage<T> {
    /// Returns `true` if another page can be fetched.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The URL of the next page, if any.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Paginated response from the Bitbucket Server/Data Center API (v1.0).
///
/// Server uses offset-based pagination with 0-indexed `start` offsets.
/// `size` reports the number of items in this page, `limit` the requested
/// page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPage<T> {
    /// Items in the current page.
    #[serde(default)]
    pub values: Vec<T>,

    /// Number of items in this page.
    #[serde(default)]
    pub size: u32,

    /// Requested page size.
    #[serde(default)]
    pub limit: u32,

    /// Whether this is the final page of results.
    #[serde(default, rename = "isLastPage")]
    pub is_last_page: bool,

    /// Offset to request for the next page; absent on the last page.
    #[serde(default, rename = "nextPageStart", skip_serializing_if = "Option::is_none")]
    pub next_page_start: Option<u32>,

    /// Offset of the first item in this page (0-indexed).
    #[serde(default)]
    pub start: u32,
}

impl<T> ServerPage<T> {
    /// Returns `true` if another page can be fetched.
    pub fn has_next(&self) -> bool {
        !self.is_last_page
    }

    /// The `start` offset to use for the next page, if any.
    pub fn next_start(&self) -> Option<u32> {
        self.next_page_start
    }
}
