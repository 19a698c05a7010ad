//
//  atlassian-cli
//  cli/bamboo.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bamboo build commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{client_for, GlobalOptions};
use crate::api::bamboo::{
    BuildResult, PlansResponse, ProjectsResponse, QueuedBuild, ResultsResponse,
};
use crate::api::Product;
use crate::output::{print_field, print_header, print_json, FieldTable, OutputFormat};

/// Work with Bamboo builds.
#[derive(Args, Debug)]
pub struct BambooCommand {
    #[command(subcommand)]
    pub command: BambooSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BambooSubcommand {
    /// List projects
    Projects(ProjectsArgs),

    /// List build plans
    Plans(PlansArgs),

    /// List recent results for a plan
    Results(ResultsArgs),

    /// View one build result, including stages and changes
    Result(ResultArgs),

    /// Print the build log of a result
    Logs(LogsArgs),

    /// Queue a new build of a plan
    Queue(QueueArgs),
}

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Maximum number of projects to return
    #[arg(long, default_value_t = 25)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct PlansArgs {
    /// Maximum number of plans to return
    #[arg(long, default_value_t = 25)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct ResultsArgs {
    /// Plan key, e.g. PROJ-PLAN
    pub plan: String,

    /// Maximum number of results to return
    #[arg(long, default_value_t = 25)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct ResultArgs {
    /// Build result key, e.g. PROJ-PLAN-42
    pub key: String,
}

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Build result key, e.g. PROJ-PLAN-42
    pub key: String,
}

#[derive(Args, Debug)]
pub struct QueueArgs {
    /// Plan key, e.g. PROJ-PLAN
    pub plan: String,
}

impl BambooCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = client_for(Product::Bamboo)?;

        match &self.command {
            BambooSubcommand::Projects(args) => {
                let response: ProjectsResponse = client
                    .get(
                        &format!("/rest/api/latest/project?max-result={}", args.limit),
                        "Bamboo projects",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&response)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["KEY", "NAME"]);
                        for project in &response.projects.entries.project {
                            table.row(vec![project.key.clone(), project.name.clone()]);
                        }
                        table.print();
                        println!(
                            "{} of {} projects",
                            response.projects.entries.project.len(),
                            response.projects.size
                        );
                    }
                }
            }

            BambooSubcommand::Plans(args) => {
                let response: PlansResponse = client
                    .get(
                        &format!("/rest/api/latest/plan?max-result={}", args.limit),
                        "Bamboo plans",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&response)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["KEY", "NAME", "ENABLED"]);
                        for plan in &response.plans.entries.plan {
                            table.row(vec![
                                plan.key.clone(),
                                plan.name.clone(),
                                plan.enabled.to_string(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            BambooSubcommand::Results(args) => {
                let response: ResultsResponse = client
                    .get(
                        &format!(
                            "/rest/api/latest/result/{}?max-result={}",
                            args.plan, args.limit
                        ),
                        "Bamboo results",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&response)?,
                    OutputFormat::Table => {
                        let mut table = FieldTable::new(vec!["KEY", "STATE", "DURATION"]);
                        for result in &response.results.entries.result {
                            table.row(vec![
                                result.build_result_key.clone().unwrap_or_default(),
                                result.build_state.clone(),
                                result.build_duration_description.clone().unwrap_or_default(),
                            ]);
                        }
                        table.print();
                    }
                }
            }

            BambooSubcommand::Result(args) => {
                let result: BuildResult = client
                    .get(
                        &format!(
                            "/rest/api/latest/result/{}?expand=stages.stage,changes.change",
                            args.key
                        ),
                        "Bamboo result",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&result)?,
                    OutputFormat::Table => print_result(&result),
                }
            }

            BambooSubcommand::Logs(args) => {
                let result: BuildResult = client
                    .get(
                        &format!(
                            "/rest/api/latest/result/{}?expand=logEntries&max-result=2000",
                            args.key
                        ),
                        "Bamboo result",
                    )
                    .await?;

                if let Some(logs) = &result.log_entries {
                    for entry in &logs.entries.log_entry {
                        println!("{}", entry.log);
                    }
                }
            }

            BambooSubcommand::Queue(args) => {
                let queued: QueuedBuild = client
                    .post(
                        &format!("/rest/api/latest/queue/{}", args.plan),
                        &serde_json::json!({}),
                        "queued Bamboo build",
                    )
                    .await?;

                match global.output {
                    OutputFormat::Json => print_json(&queued)?,
                    OutputFormat::Table => println!(
                        "Queued build {} (#{})",
                        queued.build_result_key.clone().unwrap_or(queued.plan_key.clone()),
                        queued.build_number
                    ),
                }
            }
        }

        Ok(())
    }
}

fn print_result(result: &BuildResult) {
    print_header(
        result
            .build_result_key
            .as_deref()
            .unwrap_or("build result"),
    );
    print_field("State", &result.build_state);
    print_field("Lifecycle", &result.life_cycle_state);
    if let Some(started) = &result.build_started_time {
        print_field("Started", started);
    }
    if let Some(completed) = &result.build_completed_time {
        print_field("Completed", completed);
    }
    if let Some(reason) = &result.build_reason {
        print_field("Reason", reason);
    }

    if let Some(stages) = &result.stages {
        println!();
        print_header("Stages");
        for stage in &stages.entries.stage {
            println!(
                "{}: {}",
                stage.name,
                stage.state.as_deref().unwrap_or("unknown")
            );
        }
    }

    if let Some(changes) = &result.changes {
        println!();
        print_header("Changes");
        for change in &changes.entries.change {
            println!(
                "{} {} {}",
                change.changeset_id,
                change.author,
                change.comment.as_deref().unwrap_or("")
            );
        }
    }
}
