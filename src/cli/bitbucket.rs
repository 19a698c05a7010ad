//
//  atlassian-cli
//  cli/bitbucket.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket repository, pull request, pipeline, and webhook commands.
//!
//! Repository, pull request, diff, and webhook verbs target Bitbucket
//! Server/Data Center (API v1.0). Pipeline verbs target Bitbucket Cloud
//! (API v2.0), which is the only platform that has pipelines.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{client_for, GlobalOptions};
use crate::api::bitbucket::{
    CreatePullRequestRequest, CreateRepositoryRequest, CreateWebhookRequest, DiffResponse,
    MergePullRequestRequest, Pipeline, PullRequest, RefSpec, Repository, ReviewerSpec,
    RunPipelineRequest, UserName, Webhook,
};
use crate::api::common::{CloudPage, ServerPage};
use crate::api::Product;
use crate::content::resolve_optional;
use crate::output::{
    format_epoch_millis, print_field, print_header, print_json, FieldTable, OutputFormat,
};

/// Work with Bitbucket repositories and pull requests.
#[derive(Args, Debug)]
pub struct BitbucketCommand {
    #[command(subcommand)]
    pub command: BitbucketSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BitbucketSubcommand {
    /// List repositories in a project
    Repos(ReposArgs),

    /// Create a repository in a project
    RepoCreate(RepoCreateArgs),

    /// List pull requests
    PrList(PrListArgs),

    /// View a pull request
    PrView(PrArgs),

    /// Create a pull request
    PrCreate(PrCreateArgs),

    /// Merge a pull request
    PrMerge(PrArgs),

    /// View a pull request diff
    PrDiff(PrArgs),

    /// List pipeline runs (Cloud)
    Pipelines(PipelinesArgs),

    /// Trigger a pipeline on a branch (Cloud)
    PipelineRun(PipelineRunArgs),

    /// List webhooks on a repository
    Webhooks(RepoScopedArgs),

    /// Register a webhook on a repository
    WebhookCreate(WebhookCreateArgs),
}

#[derive(Args, Debug)]
pub struct ReposArgs {
    /// Project key
    #[arg(long, short = 'p')]
    pub project: String,
}

#[derive(Args, Debug)]
pub struct RepoCreateArgs {
    /// Project key
    #[arg(long, short = 'p')]
    pub project: String,

    /// Repository name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct RepoScopedArgs {
    /// Project key
    #[arg(long, short = 'p')]
    pub project: String,

    /// Repository slug
    #[arg(long, short = 'r')]
    pub repo: String,
}

#[derive(Args, Debug)]
pub struct PrListArgs {
    #[command(flatten)]
    pub scope: RepoScopedArgs,

    /// Filter by state: OPEN, MERGED, DECLINED, or ALL
    #[arg(long, default_value = "OPEN")]
    pub state: String,
}

#[derive(Args, Debug)]
pub struct PrArgs {
    #[command(flatten)]
    pub scope: RepoScopedArgs,

    /// Pull request id
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct PrCreateArgs {
    #[command(flatten)]
    pub scope: RepoScopedArgs,

    /// Pull request title
    #[arg(long, short = 't')]
    pub title: String,

    /// Source branch
    #[arg(long)]
    pub from: String,

    /// Target branch
    #[arg(long, default_value = "main")]
    pub to: String,

    /// Description text
    #[arg(long)]
    pub description: Option<String>,

    /// Read the description from a file
    #[arg(long)]
    pub description_file: Option<String>,

    /// Reviewer usernames
    #[arg(long)]
    pub reviewer: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PipelinesArgs {
    /// Workspace slug (Cloud)
    #[arg(long, short = 'w')]
    pub workspace: String,

    /// Repository slug
    #[arg(long, short = 'r')]
    pub repo: String,
}

#[derive(Args, Debug)]
pub struct PipelineRunArgs {
    #[command(flatten)]
    pub scope: PipelinesArgs,

    /// Branch to run against
    #[arg(long, default_value = "main")]
    pub branch: String,
}

#[derive(Args, Debug)]
pub struct WebhookCreateArgs {
    #[command(flatten)]
    pub scope: RepoScopedArgs,

    /// Webhook name
    #[arg(long)]
    pub name: String,

    /// Destination URL
    #[arg(long)]
    pub url: String,

    /// Event keys, e.g. repo:refs_changed
    #[arg(long, default_value = "repo:refs_changed")]
    pub event: Vec<String>,
}

impl BitbucketCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = client_for(Product::Bitbucket)?;

        match &self.command {
            BitbucketSubcommand::Repos(args) => {
                let page: ServerPage<Repository> = client
                    .get(
                        &format!("/rest/api/1.0/projects/{}/repos", args.project),
                        "Bitbucket repositories",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["SLUG", "NAME", "STATE"]);
                        for repo in &page.values {
                            table.row(vec![
                                repo.slug.clone(),
                                repo.name.clone(),
                                repo.state.clone().unwrap_or_default(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            BitbucketSubcommand::RepoCreate(args) => {
                let request = CreateRepositoryRequest::new(&args.name);
                let repo: Repository = client
                    .post(
                        &format!("/rest/api/1.0/projects/{}/repos", args.project),
                        &request,
                        "created Bitbucket repository",
                    )
                    .await?;
                println!("Created repository {}", repo.slug);
            }

            BitbucketSubcommand::PrList(args) => {
                let page: ServerPage<PullRequest> = client
                    .get(
                        &format!(
                            "/rest/api/1.0/projects/{}/repos/{}/pull-requests?state={}",
                            args.scope.project, args.scope.repo, args.state
                        ),
                        "Bitbucket pull requests",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["ID", "STATE", "SOURCE", "TITLE"]);
                        for pr in &page.values {
                            table.row(vec![
                                pr.id.to_string(),
                                pr.state.clone(),
                                pr.from_ref.display_id.clone(),
                                pr.title.clone(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            BitbucketSubcommand::PrView(args) => {
                let pr = get_pull_request(&client, args).await?;
                match global.output {
                    OutputFormat::Json => print_json(&pr)?,
                    OutputFormat::Table => print_pull_request(&pr),
                }
            }

            BitbucketSubcommand::PrCreate(args) => {
                let description = resolve_optional(
                    args.description.as_deref(),
                    args.description_file.as_deref(),
                    "--description",
                    "--description-file",
                )?;

                let request = CreatePullRequestRequest {
                    title: args.title.clone(),
                    description,
                    from_ref: RefSpec::branch(&args.from, &args.scope.project, &args.scope.repo),
                    to_ref: RefSpec::branch(&args.to, &args.scope.project, &args.scope.repo),
                    reviewers: args
                        .reviewer
                        .iter()
                        .map(|name| ReviewerSpec {
                            user: UserName { name: name.clone() },
                        })
                        .collect(),
                };

                let pr: PullRequest = client
                    .post(
                        &format!(
                            "/rest/api/1.0/projects/{}/repos/{}/pull-requests",
                            args.scope.project, args.scope.repo
                        ),
                        &request,
                        "created Bitbucket pull request",
                    )
                    .await?;
                println!("Created pull request #{}", pr.id);
            }

            BitbucketSubcommand::PrMerge(args) => {
                // Merge needs the current entity version for optimistic locking.
                let pr = get_pull_request(&client, args).await?;
                let request = MergePullRequestRequest {
                    version: pr.version,
                };
                let merged: PullRequest = client
                    .post(
                        &format!(
                            "/rest/api/1.0/projects/{}/repos/{}/pull-requests/{}/merge",
                            args.scope.project, args.scope.repo, args.id
                        ),
                        &request,
                        "merged Bitbucket pull request",
                    )
                    .await?;
                println!("Merged pull request #{} ({})", merged.id, merged.state);
            }

            BitbucketSubcommand::PrDiff(args) => {
                let diff: DiffResponse = client
                    .get(
                        &format!(
                            "/rest/api/1.0/projects/{}/repos/{}/pull-requests/{}/diff",
                            args.scope.project, args.scope.repo, args.id
                        ),
                        "Bitbucket diff",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&diff)?,
                    OutputFormat::Table => print_diff(&diff),
                }
            }

            BitbucketSubcommand::Pipelines(args) => {
                let page: CloudPage<Pipeline> = client
                    .get(
                        &format!(
                            "/2.0/repositories/{}/{}/pipelines/?sort=-created_on",
                            args.workspace, args.repo
                        ),
                        "Bitbucket pipelines",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["#", "STATE", "RESULT", "REF"]);
                        for pipeline in &page.values {
                            table.row(vec![
                                pipeline.build_number.to_string(),
                                pipeline.state.name.clone(),
                                pipeline
                                    .state
                                    .result
                                    .as_ref()
                                    .map(|r| r.name.clone())
                                    .unwrap_or_default(),
                                pipeline
                                    .target
                                    .as_ref()
                                    .and_then(|t| t.ref_name.clone())
                                    .unwrap_or_default(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            BitbucketSubcommand::PipelineRun(args) => {
                let request = RunPipelineRequest::branch(&args.branch);
                let pipeline: Pipeline = client
                    .post(
                        &format!(
                            "/2.0/repositories/{}/{}/pipelines/",
                            args.scope.workspace, args.scope.repo
                        ),
                        &request,
                        "triggered Bitbucket pipeline",
                    )
                    .await?;
                println!(
                    "Triggered pipeline #{} on {}",
                    pipeline.build_number, args.branch
                );
            }

            BitbucketSubcommand::Webhooks(args) => {
                let page: ServerPage<Webhook> = client
                    .get(
                        &format!(
                            "/rest/api/1.0/projects/{}/repos/{}/webhooks",
                            args.project, args.repo
                        ),
                        "Bitbucket webhooks",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["ID", "NAME", "URL", "ACTIVE"]);
                        for hook in &page.values {
                            table.row(vec![
                                hook.id.map(|id| id.to_string()).unwrap_or_default(),
                                hook.name.clone(),
                                hook.url.clone(),
                                hook.active.to_string(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            BitbucketSubcommand::WebhookCreate(args) => {
                let request = CreateWebhookRequest {
                    name: args.name.clone(),
                    url: args.url.clone(),
                    events: args.event.clone(),
                    active: true,
                };
                let hook: Webhook = client
                    .post(
                        &format!(
                            "/rest/api/1.0/projects/{}/repos/{}/webhooks",
                            args.scope.project, args.scope.repo
                        ),
                        &request,
                        "created Bitbucket webhook",
                    )
                    .await?;
                println!(
                    "Created webhook {} ({})",
                    hook.name,
                    hook.id.map(|id| id.to_string()).unwrap_or_default()
                );
            }
        }

        Ok(())
    }
}

async fn get_pull_request(
    client: &crate::api::AtlassianClient,
    args: &PrArgs,
) -> Result<PullRequest> {
    Ok(client
        .get(
            &format!(
                "/rest/api/1.0/projects/{}/repos/{}/pull-requests/{}",
                args.scope.project, args.scope.repo, args.id
            ),
            "Bitbucket pull request",
        )
        .await?)
}

fn print_pull_request(pr: &PullRequest) {
    print_header(&format!("PR #{}: {}", pr.id, pr.title));
    print_field("State", &pr.state);
    print_field(
        "Source",
        &format!("{} -> {}", pr.from_ref.display_id, pr.to_ref.display_id),
    );
    print_field("Author", &pr.author.user.display_name);
    print_field("Created", &format_epoch_millis(pr.created_date));
    print_field("Updated", &format_epoch_millis(pr.updated_date));

    let approvals = pr.reviewers.iter().filter(|r| r.approved).count();
    print_field(
        "Approvals",
        &format!("{}/{}", approvals, pr.reviewers.len()),
    );

    if let Some(description) = &pr.description {
        println!();
        println!("{description}");
    }
}

fn print_diff(diff: &DiffResponse) {
    for file in &diff.diffs {
        let path = file
            .destination
            .as_ref()
            .or(file.source.as_ref())
            .and_then(|p| p.path_display.as_deref())
            .unwrap_or("(unknown)");
        print_header(path);

        for hunk in &file.hunks {
            println!(
                "@@ -{},{} +{},{} @@",
                hunk.source_line, hunk.source_span, hunk.destination_line, hunk.destination_span
            );
            for segment in &hunk.segments {
                let marker = match segment.segment_type.as_str() {
                    "ADDED" => '+',
                    "REMOVED" => '-',
                    _ => ' ',
                };
                for line in &segment.lines {
                    println!("{marker}{}", line.line);
                }
            }
        }
        println!();
    }

    if diff.is_truncated_anywhere() {
        println!("(diff truncated by the server)");
    }
}
