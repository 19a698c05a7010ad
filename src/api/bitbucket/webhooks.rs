//
//  atlassian-cli
//  api/bitbucket/webhooks.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket Server repository webhook types.

use serde::{Deserialize, Serialize};

/// A webhook registered on a repository.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: String,

    /// Destination URL the server posts events to.
    #[serde(default)]
    pub url: String,

    /// Event keys, e.g. `repo:refs_changed`, `pr:opened`.
    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default)]
    pub active: bool,

    /// Epoch milliseconds of creation.
    #[serde(default, rename = "createdDate", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<i64>,

    /// Epoch milliseconds of the last update.
    #[serde(default, rename = "updatedDate", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<i64>,
}

/// Request payload for registering a webhook.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookRequest {
    pub name: String,
    pub url: String,
    pub events: Vec<String>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_deserialize() {
        let json = r#"{
            "id": 5,
            "name": "ci-notify",
            "url": "https://ci.example.com/hook",
            "events": ["repo:refs_changed", "pr:opened"],
            "active": true,
            "createdDate": 1767868800000
        }"#;

        let hook: Webhook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.events.len(), 2);
        assert!(hook.active);
        assert_eq!(hook.created_date, Some(1767868800000));
    }

    #[test]
    fn test_sparse_webhook_defaults() {
        let hook: Webhook = serde_json::from_str(r#"{"name": "ci-notify"}"#).unwrap();
        assert_eq!(hook.url, "");
        assert!(hook.events.is_empty());
        assert!(!hook.active);
    }

    #[test]
    fn test_create_request_omits_read_only_fields() {
        let request = CreateWebhookRequest {
            name: "ci-notify".to_string(),
            url: "https://ci.example.com/hook".to_string(),
            events: vec!["pr:opened".to_string()],
            active: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("createdDate").is_none());
    }
}
