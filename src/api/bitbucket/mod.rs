//
//  atlassian-cli
//  api/bitbucket/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket REST API Types
//!
//! Wire models for source control: repositories, pull requests, commits,
//! and diffs follow the Bitbucket Server/Data Center v1.0 contract;
//! pipelines follow the Bitbucket Cloud v2.0 contract (Server has no
//! pipelines). Webhooks use the Server shape.
//!
//! List endpoints use the shared pagination envelopes from
//! [`crate::api::common`]: [`ServerPage`](crate::api::common::ServerPage)
//! for v1.0 and [`CloudPage`](crate::api::common::CloudPage) for v2.0.

pub mod diffs;
pub mod pipelines;
pub mod pullrequests;
pub mod repositories;
pub mod webhooks;

pub use diffs::*;
pub use pipelines::*;
pub use pullrequests::*;
pub use repositories::*;
pub use webhooks::*;
