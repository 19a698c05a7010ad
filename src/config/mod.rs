//
//  atlassian-cli
//  config/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Configuration file management.
//!
//! Configuration lives in a single TOML file at the platform config
//! location (`~/.config/atl/config.toml` on Linux), with one optional
//! section per product:
//!
//! ```toml
//! [jira]
//! base_url = "https://jira.example.com"
//! username = "alex@example.com"
//! token = "api-token"
//!
//! [bamboo]
//! base_url = "https://bamboo.example.com"
//! token = "personal-access-token"
//! ```
//!
//! A section with a `username` authenticates with basic auth; one with only
//! a `token` uses it as a bearer token. Tokens can be overridden per product
//! with `ATL_JIRA_TOKEN`, `ATL_CONFLUENCE_TOKEN`, `ATL_BAMBOO_TOKEN`, and
//! `ATL_BITBUCKET_TOKEN`.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::Product;
use crate::auth::AuthCredential;

/// Top-level configuration, one optional section per product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira: Option<ProductConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confluence: Option<ProductConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bamboo: Option<ProductConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitbucket: Option<ProductConfig>,
}

/// Connection details for one product instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Instance root URL, e.g. `https://jira.example.com`.
    pub base_url: String,

    /// Username for basic auth; omit for bearer-token auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// API token (basic auth) or personal access token (bearer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ProductConfig {
    /// Resolves the credential for this product, if any is configured.
    ///
    /// The `ATL_<PRODUCT>_TOKEN` environment variable takes precedence over
    /// the token in the file.
    pub fn credential(&self, product: Product) -> Option<AuthCredential> {
        let env_key = format!("ATL_{}_TOKEN", product.name().to_uppercase());
        let token = std::env::var(env_key).ok().or_else(|| self.token.clone())?;

        match &self.username {
            Some(username) => Some(AuthCredential::basic(username, token)),
            None => Some(AuthCredential::bearer(token)),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "atl")
            .ok_or_else(|| anyhow!("could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration, returning defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Returns the section for a product, or an actionable error.
    pub fn product(&self, product: Product) -> Result<&ProductConfig> {
        let section = match product {
            Product::Jira => &self.jira,
            Product::Confluence => &self.confluence,
            Product::Bamboo => &self.bamboo,
            Product::Bitbucket => &self.bitbucket,
        };
        section.as_ref().ok_or_else(|| {
            anyhow!(
                "no [{}] section in config; add one to {}",
                product.name(),
                Self::path().map(|p| p.display().to_string()).unwrap_or_default()
            )
        })
    }
}
