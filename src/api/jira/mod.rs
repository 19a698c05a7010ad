//
//  atlassian-cli
//  api/jira/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Jira REST API Types
//!
//! Wire models for the Jira issue-tracking API (v2/v3). Read shapes and
//! write shapes are deliberately distinct types: Jira rejects full nested
//! objects where key-only references are expected (and vice versa), so the
//! asymmetry is part of the wire contract. For example a fetched issue
//! carries a full [`Project`], but [`CreateIssueFields`] sends a bare
//! [`ProjectKey`] (`{"key": "PROJ"}`).

pub mod issues;

pub use issues::*;
