//
//  atlassian-cli
//  output/table.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Table rendering built on `comfy-table`.

use comfy_table::{presets::UTF8_BORDERS_ONLY, ContentArrangement, Table};

/// Builder for list output with a fixed header row.
///
/// # Example
///
/// ```rust
/// use atlassian_cli::output::FieldTable;
///
/// let mut table = FieldTable::new(vec!["KEY", "SUMMARY"]);
/// table.row(vec!["PROJ-1".to_string(), "Fix login".to_string()]);
/// println!("{}", table.render());
/// ```
pub struct FieldTable {
    table: Table,
}

impl FieldTable {
    /// Creates a table with the given header row.
    pub fn new(headers: Vec<&str>) -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_BORDERS_ONLY)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(headers);
        Self { table }
    }

    /// Appends one row; rows keep server response order.
    pub fn row(&mut self, cells: Vec<String>) {
        self.table.add_row(cells);
    }

    /// Renders the table to a string.
    pub fn render(&self) -> String {
        self.table.to_string()
    }

    /// Renders the table to stdout.
    pub fn print(&self) {
        println!("{}", self.render());
    }
}
