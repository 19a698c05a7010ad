//
//  atlassian-cli
//  output/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Output formatting.
//!
//! Commands render either a human-readable table/field view or pretty JSON
//! for scripting. Formatting is strictly a presentation concern: handlers
//! pass fully-typed wire models in, and nothing here mutates or reorders
//! server data.

use chrono::{DateTime, Local};
use clap::ValueEnum;

mod json;
mod table;

pub use json::print_json;
pub use table::FieldTable;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table output.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting.
    Json,
}

/// Prints a bold section header with an underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.len()));
}

/// Prints a `key: value` line with the key dimmed.
pub fn print_field(key: &str, value: &str) {
    use console::style;
    println!("{}: {}", style(key).dim(), value);
}

/// Formats an epoch-milliseconds timestamp as local "YYYY-MM-DD HH:MM:SS".
///
/// Bitbucket Server and Bamboo report times as Unix epoch milliseconds;
/// returns "unknown" when the value does not convert.
pub fn format_epoch_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "unknown".to_string())
}
