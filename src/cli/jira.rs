//
//  atlassian-cli
//  cli/jira.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Jira issue commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{client_for, GlobalOptions};
use crate::api::jira::{
    AddCommentRequest, AssignIssueRequest, CreateIssueFields, CreateIssueRequest, CreatedIssue,
    Issue, IssueTypeName, PriorityName, ProjectKey, SearchResults, TransitionId,
    TransitionIssueRequest, TransitionsResponse,
};
use crate::api::Product;
use crate::content::{resolve_optional, resolve_required};
use crate::output::{print_field, print_header, print_json, FieldTable, OutputFormat};

/// Work with Jira issues.
#[derive(Args, Debug)]
pub struct JiraCommand {
    #[command(subcommand)]
    pub command: JiraSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JiraSubcommand {
    /// List issues matching a JQL query
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View an issue
    View(ViewArgs),

    /// Create an issue
    Create(CreateArgs),

    /// Add a comment to an issue
    Comment(CommentArgs),

    /// Assign an issue to a user
    Assign(AssignArgs),

    /// List available transitions for an issue
    Transitions(TransitionsArgs),

    /// Move an issue through a workflow transition
    Transition(TransitionArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// JQL query, e.g. "project = PROJ AND status != Done"
    #[arg(long)]
    pub jql: String,

    /// Maximum number of issues to return
    #[arg(long, default_value_t = 25)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Issue key, e.g. PROJ-123
    pub key: String,

    /// Include comments
    #[arg(long)]
    pub comments: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project key
    #[arg(long, short = 'p')]
    pub project: String,

    /// One-line summary
    #[arg(long, short = 's')]
    pub summary: String,

    /// Issue type name
    #[arg(long, short = 't', default_value = "Task")]
    pub issue_type: String,

    /// Description text
    #[arg(long)]
    pub description: Option<String>,

    /// Read the description from a file
    #[arg(long)]
    pub description_file: Option<String>,

    /// Priority name
    #[arg(long)]
    pub priority: Option<String>,

    /// Labels to attach
    #[arg(long)]
    pub label: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Issue key
    pub key: String,

    /// Comment text
    #[arg(long)]
    pub body: Option<String>,

    /// Read the comment from a file
    #[arg(long)]
    pub body_file: Option<String>,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Issue key
    pub key: String,

    /// Account id of the assignee; omit to unassign
    #[arg(long)]
    pub account_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct TransitionsArgs {
    /// Issue key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Issue key
    pub key: String,

    /// Transition id (see `atl jira transitions`)
    #[arg(long)]
    pub id: String,
}

impl JiraCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = client_for(Product::Jira)?;

        match &self.command {
            JiraSubcommand::List(args) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("jql", &args.jql)
                    .append_pair("maxResults", &args.limit.to_string())
                    .finish();
                let results: SearchResults = client
                    .get(&format!("/rest/api/2/search?{query}"), "Jira search results")
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&results)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["KEY", "STATUS", "SUMMARY"]);
                        for issue in &results.issues {
                            table.row(vec![
                                issue.key.clone(),
                                issue
                                    .fields
                                    .status
                                    .as_ref()
                                    .map(|s| s.name.clone())
                                    .unwrap_or_default(),
                                issue.fields.summary.clone().unwrap_or_default(),
                            ]);
                        }
                        table.print();
                        println!("{} of {} issues", results.issues.len(), results.total);
                    }
                }
            }

            JiraSubcommand::View(args) => {
                let path = if args.comments {
                    format!("/rest/api/2/issue/{}?fields=*all", args.key)
                } else {
                    format!("/rest/api/2/issue/{}", args.key)
                };
                let issue: Issue = client.get(&path, "Jira issue").await?;

                match global.output {
                    OutputFormat::Json => print_json(&issue)?,
                    OutputFormat::Table => print_issue(&issue, args.comments),
                }
            }

            JiraSubcommand::Create(args) => {
                let description = resolve_optional(
                    args.description.as_deref(),
                    args.description_file.as_deref(),
                    "--description",
                    "--description-file",
                )?;

                let request = CreateIssueRequest {
                    fields: CreateIssueFields {
                        project: ProjectKey {
                            key: args.project.clone(),
                        },
                        summary: args.summary.clone(),
                        issuetype: IssueTypeName {
                            name: args.issue_type.clone(),
                        },
                        description,
                        priority: args.priority.clone().map(|name| PriorityName { name }),
                        labels: args.label.clone(),
                    },
                };

                let created: CreatedIssue = client
                    .post("/rest/api/2/issue", &request, "created Jira issue")
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&created)?,
                    OutputFormat::Table => println!("Created {}", created.key),
                }
            }

            JiraSubcommand::Comment(args) => {
                let body = resolve_required(
                    args.body.as_deref(),
                    args.body_file.as_deref(),
                    "--body",
                    "--body-file",
                )?;
                let request = AddCommentRequest { body };
                let _: serde_json::Value = client
                    .post(
                        &format!("/rest/api/2/issue/{}/comment", args.key),
                        &request,
                        "Jira comment",
                    )
                    .await?;
                println!("Commented on {}", args.key);
            }

            JiraSubcommand::Assign(args) => {
                let request = AssignIssueRequest {
                    account_id: args.account_id.clone(),
                };
                client
                    .put_no_content(&format!("/rest/api/2/issue/{}/assignee", args.key), &request)
                    .await?;
                match &args.account_id {
                    Some(id) => println!("Assigned {} to {}", args.key, id),
                    None => println!("Unassigned {}", args.key),
                }
            }

            JiraSubcommand::Transitions(args) => {
                let response: TransitionsResponse = client
                    .get(
                        &format!("/rest/api/2/issue/{}/transitions", args.key),
                        "Jira transitions",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&response)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["ID", "NAME", "TO"]);
                        for transition in &response.transitions {
                            table.row(vec![
                                transition.id.clone(),
                                transition.name.clone(),
                                transition
                                    .to
                                    .as_ref()
                                    .map(|s| s.name.clone())
                                    .unwrap_or_default(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            JiraSubcommand::Transition(args) => {
                let request = TransitionIssueRequest {
                    transition: TransitionId {
                        id: args.id.clone(),
                    },
                };
                client
                    .post_no_content(
                        &format!("/rest/api/2/issue/{}/transitions", args.key),
                        &request,
                    )
                    .await?;
                println!("Transitioned {}", args.key);
            }
        }

        Ok(())
    }
}

fn print_issue(issue: &Issue, with_comments: bool) {
    print_header(&format!(
        "{} {}",
        issue.key,
        issue.fields.summary.as_deref().unwrap_or("")
    ));
    if let Some(status) = &issue.fields.status {
        print_field("Status", &status.name);
    }
    if let Some(issuetype) = &issue.fields.issuetype {
        print_field("Type", &issuetype.name);
    }
    if let Some(priority) = &issue.fields.priority {
        print_field("Priority", &priority.name);
    }
    if let Some(assignee) = &issue.fields.assignee {
        print_field("Assignee", &assignee.display_name);
    }
    if let Some(reporter) = &issue.fields.reporter {
        print_field("Reporter", &reporter.display_name);
    }
    if let Some(description) = &issue.fields.description {
        println!();
        println!("{description}");
    }

    if with_comments {
        if let Some(container) = &issue.fields.comment {
            println!();
            print_header(&format!("Comments ({})", container.total));
            for comment in &container.comments {
                let author = comment
                    .author
                    .as_ref()
                    .map(|a| a.display_name.as_str())
                    .unwrap_or("unknown");
                println!("[{}] {}", author, comment.body);
            }
        }
    }
}
