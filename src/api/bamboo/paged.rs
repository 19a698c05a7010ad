//
//  atlassian-cli
//  api/bamboo/paged.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! The Bamboo pagination envelope.
//!
//! Roughly ten Bamboo entity kinds are returned inside the exact same
//! wrapper:
//!
//! ```json
//! {"size": 2, "start-index": 0, "max-result": 25, "plan": [ ... ]}
//! ```
//!
//! Only the item key differs (`plan`, `branch`, `result`, ...). The envelope
//! is one generic type, [`PagedList`], parameterized by a small entry struct
//! that pins the item key; the hyphenated wire names `start-index` and
//! `max-result` are part of the compatibility contract and identical for
//! every instantiation.
//!
//! # Example
//!
//! ```rust
//! use atlassian_cli::api::bamboo::{PagedList, PlanEntries};
//!
//! let json = r#"{"size":1,"start-index":0,"max-result":25,
//!                "plan":[{"key":"PROJ-PLAN","name":"Build"}]}"#;
//! let plans: PagedList<PlanEntries> = serde_json::from_str(json).unwrap();
//! assert_eq!(plans.entries.plan[0].key, "PROJ-PLAN");
//! ```

use serde::{Deserialize, Serialize};

/// Generic Bamboo pagination envelope.
///
/// `E` is one of the `*Entries` structs from this family, which contributes
/// the kind-specific item key via `#[serde(flatten)]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PagedList<E> {
    /// Total number of items available.
    #[serde(default)]
    pub size: u32,

    /// Offset of the first item in this page (0-indexed).
    #[serde(default, rename = "start-index")]
    pub start_index: u32,

    /// Maximum number of items per page.
    #[serde(default, rename = "max-result")]
    pub max_result: u32,

    /// The items, under their kind-specific wire key.
    #[serde(flatten)]
    pub entries: E,
}

impl<E> PagedList<E> {
    /// Returns `true` when a further page exists beyond this one.
    ///
    /// Bamboo reports the total `size`; the page covers
    /// `start-index .. start-index + max-result`. Widened to `u64` so a
    /// hostile envelope cannot overflow the sum.
    pub fn has_next(&self) -> bool {
        (self.start_index as u64) + (self.max_result as u64) < self.size as u64
    }

    /// The `start-index` to request for the next page, if any.
    pub fn next_start(&self) -> Option<u32> {
        if self.has_next() {
            // has_next guarantees the sum is below `size`, so it fits.
            Some(self.start_index + self.max_result)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct ThingEntries {
        #[serde(default)]
        thing: Vec<String>,
    }

    #[test]
    fn test_wire_names_round_trip() {
        let json = r#"{"size":30,"start-index":0,"max-result":25,"thing":["a","b"]}"#;
        let page: PagedList<ThingEntries> = serde_json::from_str(json).unwrap();
        assert_eq!(page.size, 30);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.max_result, 25);
        assert_eq!(page.entries.thing, vec!["a", "b"]);

        let out = serde_json::to_value(&page).unwrap();
        assert_eq!(out["start-index"], 0);
        assert_eq!(out["max-result"], 25);
    }

    #[test]
    fn test_paging_arithmetic() {
        let page: PagedList<ThingEntries> =
            serde_json::from_str(r#"{"size":30,"start-index":0,"max-result":25}"#).unwrap();
        assert!(page.has_next());
        assert_eq!(page.next_start(), Some(25));

        let last: PagedList<ThingEntries> =
            serde_json::from_str(r#"{"size":30,"start-index":25,"max-result":25}"#).unwrap();
        assert!(!last.has_next());
        assert_eq!(last.next_start(), None);
    }

    #[test]
    fn test_oversized_max_result_does_not_overflow() {
        let page: PagedList<ThingEntries> = serde_json::from_str(
            r#"{"size":10,"start-index":1,"max-result":4294967295}"#,
        )
        .unwrap();
        assert!(!page.has_next());
        assert_eq!(page.next_start(), None);
    }

    #[test]
    fn test_missing_item_key_yields_empty() {
        let page: PagedList<ThingEntries> =
            serde_json::from_str(r#"{"size":0,"start-index":0,"max-result":25}"#).unwrap();
        assert!(page.entries.thing.is_empty());
    }
}
