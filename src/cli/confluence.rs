//
//  atlassian-cli
//  cli/confluence.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Confluence page commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{client_for, GlobalOptions};
use crate::api::confluence::{CreatePageRequest, Page, PageResults, UpdatePageRequest};
use crate::api::Product;
use crate::content::resolve_required;
use crate::output::{print_field, print_header, print_json, FieldTable, OutputFormat};

/// Work with Confluence pages.
#[derive(Args, Debug)]
pub struct ConfluenceCommand {
    #[command(subcommand)]
    pub command: ConfluenceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfluenceSubcommand {
    /// List pages in a space
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a page
    View(ViewArgs),

    /// Create a page
    Create(CreateArgs),

    /// Update a page's title and body
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Space key
    #[arg(long, short = 's')]
    pub space: String,

    /// Maximum number of pages to return
    #[arg(long, default_value_t = 25)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Page id
    pub id: String,

    /// Print the storage-format body instead of metadata
    #[arg(long)]
    pub body: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Space key
    #[arg(long, short = 's')]
    pub space: String,

    /// Page title
    #[arg(long, short = 't')]
    pub title: String,

    /// Page body in storage format (XHTML)
    #[arg(long)]
    pub body: Option<String>,

    /// Read the body from a file
    #[arg(long)]
    pub body_file: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Page id
    pub id: String,

    /// New title; defaults to the current title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New body in storage format (XHTML)
    #[arg(long)]
    pub body: Option<String>,

    /// Read the body from a file
    #[arg(long)]
    pub body_file: Option<String>,
}

impl ConfluenceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = client_for(Product::Confluence)?;

        match &self.command {
            ConfluenceSubcommand::List(args) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("spaceKey", &args.space)
                    .append_pair("limit", &args.limit.to_string())
                    .append_pair("expand", "version")
                    .finish();
                let results: PageResults = client
                    .get(&format!("/rest/api/content?{query}"), "Confluence pages")
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&results)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["ID", "VERSION", "TITLE"]);
                        for page in &results.results {
                            table.row(vec![
                                page.id.clone(),
                                page.version
                                    .as_ref()
                                    .map(|v| v.number.to_string())
                                    .unwrap_or_default(),
                                page.title.clone(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            ConfluenceSubcommand::View(args) => {
                let page: Page = client
                    .get(
                        &format!(
                            "/rest/api/content/{}?expand=body.storage,version,space",
                            args.id
                        ),
                        "Confluence page",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Table => {
                        if args.body {
                            let storage = page
                                .body
                                .as_ref()
                                .and_then(|b| b.storage.as_ref())
                                .map(|s| s.value.as_str())
                                .unwrap_or("");
                            println!("{storage}");
                        } else {
                            print_page(&page);
                        }
                    }
                }
            }

            ConfluenceSubcommand::Create(args) => {
                let body = resolve_required(
                    args.body.as_deref(),
                    args.body_file.as_deref(),
                    "--body",
                    "--body-file",
                )?;
                let request = CreatePageRequest::new(&args.space, &args.title, body);
                let page: Page = client
                    .post("/rest/api/content", &request, "created Confluence page")
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Table => println!("Created page {} ({})", page.title, page.id),
                }
            }

            ConfluenceSubcommand::Update(args) => {
                let body = resolve_required(
                    args.body.as_deref(),
                    args.body_file.as_deref(),
                    "--body",
                    "--body-file",
                )?;

                // The update must carry the last-read version plus one.
                let current: Page = client
                    .get(
                        &format!("/rest/api/content/{}?expand=version", args.id),
                        "Confluence page",
                    )
                    .await?;

                let title = args.title.clone().unwrap_or_else(|| current.title.clone());
                let request = UpdatePageRequest::for_page(&current, title, body);
                let updated: Page = client
                    .put(
                        &format!("/rest/api/content/{}", args.id),
                        &request,
                        "updated Confluence page",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&updated)?,
                    OutputFormat::Table => println!(
                        "Updated {} to version {}",
                        updated.title,
                        updated.version.as_ref().map(|v| v.number).unwrap_or_default()
                    ),
                }
            }
        }

        Ok(())
    }
}

fn print_page(page: &Page) {
    print_header(&page.title);
    print_field("Id", &page.id);
    print_field("Status", &page.status);
    if let Some(space) = &page.space {
        print_field("Space", &space.key);
    }
    if let Some(version) = &page.version {
        print_field("Version", &version.number.to_string());
    }
    if let Some(links) = &page.links {
        if let (Some(base), Some(webui)) = (&links.base, &links.web_ui) {
            print_field("Url", &format!("{base}{webui}"));
        }
    }
}
