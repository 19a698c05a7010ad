//
//  atlassian-cli
//  cli/mod.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Command-line interface definitions.
//!
//! The root command fans out into one subcommand per product plus shell
//! completion generation. Handlers stay thin: they resolve long-form text
//! through [`crate::content`], build a typed request from
//! [`crate::api`], hand it to the [`AtlassianClient`], and print the typed
//! response. All policy lives in those layers, not here.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{AtlassianClient, Product};
use crate::config::Config;
use crate::output::OutputFormat;

pub mod bamboo;
pub mod bitbucket;
pub mod completion;
pub mod confluence;
pub mod jira;

/// Root command.
#[derive(Parser, Debug)]
#[command(name = "atl", version, about = "Unified CLI for Jira, Confluence, Bamboo, and Bitbucket")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with Jira issues
    Jira(jira::JiraCommand),

    /// Work with Confluence pages
    #[command(visible_alias = "wiki")]
    Confluence(confluence::ConfluenceCommand),

    /// Work with Bamboo builds
    Bamboo(bamboo::BambooCommand),

    /// Work with Bitbucket repositories and pull requests
    #[command(visible_alias = "bb")]
    Bitbucket(bitbucket::BitbucketCommand),

    /// Generate shell completions
    Completion(completion::CompletionCommand),
}

/// Builds an authenticated client for one product from the config file.
pub(crate) fn client_for(product: Product) -> Result<AtlassianClient> {
    let config = Config::load()?;
    let section = config.product(product)?;

    let mut client = AtlassianClient::new(product, section.base_url.clone())?;
    if let Some(credential) = section.credential(product) {
        client = client.with_auth(credential);
    }
    Ok(client)
}
