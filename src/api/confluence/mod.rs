//
//  atlassian-cli
//  api/confluence/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Confluence REST API Types
//!
//! Wire models for Confluence wiki pages. The interesting contract here is
//! optimistic concurrency: every page carries a monotonically increasing
//! version number, and an update must send the number it last read plus one
//! or the server rejects the write. [`UpdatePageRequest::for_page`] encodes
//! that rule so handlers cannot get it wrong.

pub mod pages;

pub use pages::*;
