//
//  atlassian-cli
//  output/json.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! JSON output for scripting.

use anyhow::Result;
use serde::Serialize;

/// Pretty-prints any serializable value to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_print_json_serializes() {
        let sample = Sample {
            name: "x".to_string(),
            count: 2,
        };
        assert!(print_json(&sample).is_ok());
    }
}
