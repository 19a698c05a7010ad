//
//  atlassian-cli
//  api/bamboo/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bamboo REST API Types
//!
//! Wire models for the Bamboo CI/CD API. Bamboo responses are deeply nested
//! list-of-list structures, and every list wrapper repeats the same
//! pagination envelope (`size`, `start-index`, `max-result` plus a per-kind
//! item key). That envelope is modeled once as [`PagedList`] and
//! instantiated per entity kind rather than copy-pasted.

pub mod paged;
pub mod plans;
pub mod results;

pub use paged::*;
pub use plans::*;
pub use results::*;
