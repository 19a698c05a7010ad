//
//  atlassian-cli
//  api/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! API clients and wire models for the four Atlassian products.
//!
//! Each product family lives in its own module and shares nothing with the
//! others beyond [`common`]. The wire models are passive: field names and
//! optionality mirror the JSON contracts exactly, deserialization is lenient
//! toward unknown or missing optional fields, and request shapes never emit
//! read-only fields.

pub mod bamboo;
pub mod bitbucket;
pub mod client;
pub mod common;
pub mod confluence;
pub mod jira;

pub use client::{format_api_error, AtlassianClient, Product};
