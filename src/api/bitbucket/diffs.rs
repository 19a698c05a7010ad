//
//  atlassian-cli
//  api/bitbucket/diffs.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket Server diff tree types.
//!
//! A diff response is a recursive tree: [`DiffResponse`] holds one [`Diff`]
//! per file, each diff holds [`DiffHunk`]s, each hunk holds [`DiffSegment`]s
//! (added/removed/context runs), and each segment holds [`DiffLine`]s.
//! The server can truncate independently at several depths at once, so each
//! level carries its own `truncated` flag; use
//! [`DiffResponse::is_truncated_anywhere`] before treating the tree as a
//! complete diff.

use serde::{Deserialize, Serialize};

/// Response shape of the pull request and commit diff endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResponse {
    #[serde(default, rename = "fromHash", skip_serializing_if = "Option::is_none")]
    pub from_hash: Option<String>,

    #[serde(default, rename = "toHash", skip_serializing_if = "Option::is_none")]
    pub to_hash: Option<String>,

    /// Context lines requested around each change.
    #[serde(
        default,
        rename = "contextLines",
        skip_serializing_if = "Option::is_none"
    )]
    pub context_lines: Option<u32>,

    /// Per-file diffs.
    #[serde(default)]
    pub diffs: Vec<Diff>,

    /// Whether the set of file diffs itself was cut short.
    #[serde(default)]
    pub truncated: bool,
}

impl DiffResponse {
    /// Reports truncation at any depth of the tree.
    ///
    /// Truncation can occur at multiple levels simultaneously; reassembling
    /// a full diff requires checking all of them.
    pub fn is_truncated_anywhere(&self) -> bool {
        self.truncated
            || self.diffs.iter().any(|diff| {
                diff.truncated
                    || diff.hunks.iter().any(|hunk| {
                        hunk.truncated
                            || hunk.segments.iter().any(|segment| {
                                segment.truncated
                                    || segment.lines.iter().any(|line| line.truncated)
                            })
                    })
            })
    }
}

/// Diff of a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diff {
    /// Path on the `from` side; absent for added files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DiffPath>,

    /// Path on the `to` side; absent for deleted files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<DiffPath>,

    #[serde(default)]
    pub hunks: Vec<DiffHunk>,

    #[serde(default)]
    pub truncated: bool,

    /// Whether the file is binary (no hunks in that case).
    #[serde(default)]
    pub binary: bool,
}

/// A file path within a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffPath {
    /// Path split into components.
    #[serde(default)]
    pub components: Vec<String>,

    /// Directory part of the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Full path as one string; wire key is `toString`.
    #[serde(default, rename = "toString", skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

/// A contiguous changed region of a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffHunk {
    /// First line of the hunk on the source side.
    #[serde(default, rename = "sourceLine")]
    pub source_line: u32,

    /// Number of source lines covered.
    #[serde(default, rename = "sourceSpan")]
    pub source_span: u32,

    /// First line of the hunk on the destination side.
    #[serde(default, rename = "destinationLine")]
    pub destination_line: u32,

    /// Number of destination lines covered.
    #[serde(default, rename = "destinationSpan")]
    pub destination_span: u32,

    #[serde(default)]
    pub segments: Vec<DiffSegment>,

    #[serde(default)]
    pub truncated: bool,
}

/// A run of lines of one kind within a hunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// `ADDED`, `REMOVED`, or `CONTEXT`.
    #[serde(default, rename = "type")]
    pub segment_type: String,

    #[serde(default)]
    pub lines: Vec<DiffLine>,

    #[serde(default)]
    pub truncated: bool,
}

/// A single line of a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Line number on the source side.
    #[serde(default)]
    pub source: u32,

    /// Line number on the destination side.
    #[serde(default)]
    pub destination: u32,

    /// Line text without trailing newline.
    #[serde(default)]
    pub line: String,

    #[serde(default)]
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_diff() -> DiffResponse {
        serde_json::from_str(
            r#"{
                "fromHash": "abc123",
                "toHash": "def456",
                "contextLines": 10,
                "truncated": false,
                "diffs": [
                    {
                        "source": {
                            "components": ["src", "main.rs"],
                            "parent": "src",
                            "name": "main.rs",
                            "extension": "rs",
                            "toString": "src/main.rs"
                        },
                        "destination": {
                            "components": ["src", "main.rs"],
                            "toString": "src/main.rs"
                        },
                        "truncated": false,
                        "hunks": [
                            {
                                "sourceLine": 1,
                                "sourceSpan": 3,
                                "destinationLine": 1,
                                "destinationSpan": 4,
                                "truncated": false,
                                "segments": [
                                    {
                                        "type": "CONTEXT",
                                        "truncated": false,
                                        "lines": [{"source": 1, "destination": 1, "line": "fn main() {"}]
                                    },
                                    {
                                        "type": "ADDED",
                                        "truncated": false,
                                        "lines": [{"source": 2, "destination": 2, "line": "    init();"}]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_diff_tree_structure() {
        let response = sample_diff();
        assert_eq!(response.from_hash.as_deref(), Some("abc123"));

        let diff = &response.diffs[0];
        assert_eq!(
            diff.source.as_ref().unwrap().path_display.as_deref(),
            Some("src/main.rs")
        );

        let hunk = &diff.hunks[0];
        assert_eq!(hunk.destination_span, 4);
        assert_eq!(hunk.segments[0].segment_type, "CONTEXT");
        assert_eq!(hunk.segments[1].segment_type, "ADDED");
        assert_eq!(hunk.segments[1].lines[0].line, "    init();");
    }

    #[test]
    fn test_no_truncation_anywhere() {
        assert!(!sample_diff().is_truncated_anywhere());
    }

    #[test]
    fn test_truncation_detected_at_segment_depth() {
        let mut response = sample_diff();
        response.diffs[0].hunks[0].segments[1].truncated = true;
        assert!(response.is_truncated_anywhere());
    }

    #[test]
    fn test_truncation_detected_at_multiple_depths() {
        let mut response = sample_diff();
        response.truncated = true;
        response.diffs[0].hunks[0].truncated = true;
        assert!(response.is_truncated_anywhere());
    }

    #[test]
    fn test_path_display_maps_to_string_wire_key() {
        let path = DiffPath {
            components: vec!["src".to_string(), "lib.rs".to_string()],
            parent: Some("src".to_string()),
            name: Some("lib.rs".to_string()),
            extension: Some("rs".to_string()),
            path_display: Some("src/lib.rs".to_string()),
        };
        let value = serde_json::to_value(&path).unwrap();
        assert_eq!(value["toString"], "src/lib.rs");
    }

    #[test]
    fn test_sparse_segment_defaults() {
        let segment: DiffSegment = serde_json::from_str(r#"{"lines": []}"#).unwrap();
        assert_eq!(segment.segment_type, "");
        assert!(!segment.truncated);
    }

    #[test]
    fn test_added_file_has_no_source() {
        let json = r#"{
            "destination": {"toString": "README.md"},
            "hunks": [],
            "truncated": false
        }"#;
        let diff: Diff = serde_json::from_str(json).unwrap();
        assert!(diff.source.is_none());
        assert!(diff.destination.is_some());
    }

    #[test]
    fn test_diff_round_trip() {
        let response = sample_diff();
        let round: DiffResponse =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(round, response);
    }
}
