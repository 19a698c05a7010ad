//
//  atlassian-cli
//  api/confluence/pages.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Confluence page types.
//!
//! A page body carries up to two representations: `storage` (the XHTML
//! storage format used for editing) and `view` (rendered HTML for display).
//! Which ones are present depends on the `expand` parameter of the request,
//! so both are independently optional ("absent" and "present but empty"
//! are different states, and both occur in practice).

use serde::{Deserialize, Serialize};

fn default_page_type() -> String {
    "page".to_string()
}

fn default_status() -> String {
    "current".to_string()
}

/// A Confluence page as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page identifier, as a string on the wire.
    #[serde(default)]
    pub id: String,

    /// Content type; defaults to `page` when the server omits it.
    #[serde(rename = "type", default = "default_page_type")]
    pub page_type: String,

    /// Lifecycle status; defaults to `current`.
    #[serde(default = "default_status")]
    pub status: String,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// The space this page lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceReference>,

    /// Body representations, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PageBody>,

    /// Version metadata, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<PageVersion>,

    /// Navigation links.
    #[serde(default, rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

/// Reference to the space that owns a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceReference {
    /// Space key, e.g. `DOCS`.
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of a page, holding mutually optional representations.
///
/// A page fetched for editing carries `storage`; one fetched for display
/// may carry `view`; both are present when both were requested via
/// expansion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewContent>,
}

impl PageBody {
    /// Builds a body carrying only the storage representation.
    pub fn storage(value: impl Into<String>) -> Self {
        Self {
            storage: Some(StorageContent::new(value)),
            view: None,
        }
    }
}

/// XHTML storage-format content, used for edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageContent {
    /// The XHTML markup.
    #[serde(default)]
    pub value: String,

    /// Always `storage` on the wire.
    #[serde(default)]
    pub representation: String,
}

impl StorageContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            representation: "storage".to_string(),
        }
    }
}

/// Rendered HTML content, used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewContent {
    /// The rendered HTML.
    #[serde(default)]
    pub value: String,

    /// Always `view` on the wire.
    #[serde(default)]
    pub representation: String,
}

/// Version metadata used for optimistic concurrency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageVersion {
    /// Monotonically increasing version counter.
    #[serde(default)]
    pub number: i32,

    /// ISO 8601 timestamp of this version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Edit message for this version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, rename = "minorEdit")]
    pub minor_edit: bool,
}

/// Links attached to a page under the `_links` wire key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageLinks {
    /// Relative web UI path.
    #[serde(default, rename = "webui", skip_serializing_if = "Option::is_none")]
    pub web_ui: Option<String>,

    /// Short link path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tinyui: Option<String>,

    /// Instance base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Response shape of page list and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResults {
    #[serde(default)]
    pub results: Vec<Page>,

    #[serde(default)]
    pub start: u32,

    #[serde(default)]
    pub limit: u32,

    #[serde(default)]
    pub size: u32,
}

/// Request payload for creating a page.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    #[serde(rename = "type")]
    pub page_type: String,

    pub title: String,

    /// Target space, referenced by key only.
    pub space: SpaceKey,

    /// Body with the storage representation.
    pub body: PageBody,

    /// Parent pages; empty for a top-level page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<AncestorRef>,
}

impl CreatePageRequest {
    /// Builds a create request for a storage-format body.
    pub fn new(space_key: impl Into<String>, title: impl Into<String>, storage: impl Into<String>) -> Self {
        Self {
            page_type: "page".to_string(),
            title: title.into(),
            space: SpaceKey {
                key: space_key.into(),
            },
            body: PageBody::storage(storage),
            ancestors: vec![],
        }
    }
}

/// Key-only space reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceKey {
    pub key: String,
}

/// Id-only ancestor reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct AncestorRef {
    pub id: String,
}

/// Request payload for updating a page.
///
/// The carried version number must be the last-read version plus one; the
/// server rejects stale numbers. Build it with [`UpdatePageRequest::for_page`]
/// to get the increment right.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePageRequest {
    pub version: VersionNumber,

    #[serde(rename = "type")]
    pub page_type: String,

    pub title: String,

    pub body: PageBody,
}

impl UpdatePageRequest {
    /// Builds an update for `page`, bumping its version by one.
    ///
    /// A page without expanded version metadata is treated as version 0,
    /// producing an update to version 1.
    pub fn for_page(page: &Page, title: impl Into<String>, storage: impl Into<String>) -> Self {
        let current = page.version.as_ref().map(|v| v.number).unwrap_or(0);
        Self {
            version: VersionNumber {
                number: current + 1,
            },
            page_type: page.page_type.clone(),
            title: title.into(),
            body: PageBody::storage(storage),
        }
    }
}

/// Number-only version reference for write payloads.
#[derive(Debug, Clone, Serialize)]
pub struct VersionNumber {
    pub number: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_v3() -> Page {
        serde_json::from_str(
            r#"{
                "id": "123456",
                "type": "page",
                "status": "current",
                "title": "Release Notes",
                "space": {"key": "DOCS", "name": "Documentation"},
                "body": {
                    "storage": {"value": "<p>hello</p>", "representation": "storage"}
                },
                "version": {"number": 3, "when": "2026-01-10T12:00:00.000Z", "minorEdit": false},
                "_links": {"webui": "/display/DOCS/Release+Notes", "base": "https://wiki.example.com"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_page_deserializes_storage_body() {
        let page = page_v3();
        assert_eq!(page.title, "Release Notes");
        assert_eq!(page.space.as_ref().unwrap().key, "DOCS");

        let body = page.body.as_ref().unwrap();
        assert_eq!(body.storage.as_ref().unwrap().value, "<p>hello</p>");
        assert!(body.view.is_none());
    }

    #[test]
    fn test_page_type_and_status_default() {
        let page: Page =
            serde_json::from_str(r#"{"id": "1", "title": "Untitled"}"#).unwrap();
        assert_eq!(page.page_type, "page");
        assert_eq!(page.status, "current");
    }

    #[test]
    fn test_body_may_carry_view_only() {
        let body: PageBody = serde_json::from_str(
            r#"{"view": {"value": "<p>rendered</p>", "representation": "view"}}"#,
        )
        .unwrap();
        assert!(body.storage.is_none());
        assert_eq!(body.view.as_ref().unwrap().representation, "view");
    }

    #[test]
    fn test_update_request_bumps_version() {
        let page = page_v3();
        let request = UpdatePageRequest::for_page(&page, "Release Notes", "<p>updated</p>");
        assert_eq!(request.version.number, 4);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["version"]["number"], 4);
        assert_eq!(value["type"], "page");
        assert_eq!(value["body"]["storage"]["representation"], "storage");
        // A storage-only body must not emit a `view` key.
        assert!(value["body"].get("view").is_none());
    }

    #[test]
    fn test_create_request_shape() {
        let request = CreatePageRequest::new("DOCS", "New Page", "<p>content</p>");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "page");
        assert_eq!(value["space"]["key"], "DOCS");
        assert_eq!(value["body"]["storage"]["value"], "<p>content</p>");
        assert!(value.get("ancestors").is_none());
    }

    #[test]
    fn test_page_round_trip() {
        let page = page_v3();
        let round: Page =
            serde_json::from_str(&serde_json::to_string(&page).unwrap()).unwrap();
        assert_eq!(round, page);
    }

    #[test]
    fn test_sparse_references_default() {
        let space: SpaceReference = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(space.key, "");

        let version: PageVersion = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(version.number, 0);

        // An update built from such a page still targets version 1.
        let page: Page =
            serde_json::from_str(r#"{"id": "9", "title": "Bare", "version": {}}"#).unwrap();
        let request = UpdatePageRequest::for_page(&page, "Bare", "<p>x</p>");
        assert_eq!(request.version.number, 1);
    }

    #[test]
    fn test_page_results_envelope() {
        let json = r#"{
            "results": [{"id": "1", "title": "A"}, {"id": "2", "title": "B"}],
            "start": 0,
            "limit": 25,
            "size": 2
        }"#;
        let results: PageResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.size, 2);
        assert_eq!(results.results[0].title, "A");
        assert_eq!(results.results[1].title, "B");
    }
}
