//
//  atlassian-cli
//  api/bamboo/plans.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bamboo project, plan, branch, stage, and variable types.

use serde::{Deserialize, Serialize};

use super::paged::PagedList;
use crate::api::common::Link;

/// Paged list of [`Project`]s, item key `project`.
pub type ProjectsList = PagedList<ProjectEntries>;

/// Paged list of [`Plan`]s, item key `plan`.
pub type PlansList = PagedList<PlanEntries>;

/// Paged list of [`Branch`]es, item key `branch`.
pub type BranchesList = PagedList<BranchEntries>;

/// Paged list of [`Stage`]s, item key `stage`.
pub type StagesList = PagedList<StageEntries>;

/// Paged list of [`Variable`]s, item key `variable`.
pub type VariablesList = PagedList<VariableEntries>;

/// Item key for project lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectEntries {
    #[serde(default)]
    pub project: Vec<Project>,
}

/// Item key for plan lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanEntries {
    #[serde(default)]
    pub plan: Vec<Plan>,
}

/// Item key for branch lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BranchEntries {
    #[serde(default)]
    pub branch: Vec<Branch>,
}

/// Item key for stage lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StageEntries {
    #[serde(default)]
    pub stage: Vec<Stage>,
}

/// Item key for variable lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariableEntries {
    #[serde(default)]
    pub variable: Vec<Variable>,
}

/// A Bamboo project, owning its plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project key, e.g. `PROJ`.
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// Plans under this project, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plans: Option<PlansList>,
}

/// A build plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan key, e.g. `PROJ-PLAN`.
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub name: String,

    /// Plan name without the project prefix.
    #[serde(default, rename = "shortName", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default, rename = "isBuilding")]
    pub is_building: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// Stages of this plan, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<StagesList>,

    /// Branch plans of this plan, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<BranchesList>,

    /// Plan variables, when expanded.
    #[serde(
        default,
        rename = "variableContext",
        skip_serializing_if = "Option::is_none"
    )]
    pub variable_context: Option<VariablesList>,
}

/// A branch plan derived from a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch plan key, e.g. `PROJ-PLAN123`.
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "shortName", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A stage within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A plan or build variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable key, e.g. `dependency.check.version`.
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub value: String,

    /// Scope of the variable (`PLAN`, `GLOBAL`, ...).
    #[serde(
        default,
        rename = "variableType",
        skip_serializing_if = "Option::is_none"
    )]
    pub variable_type: Option<String>,
}

/// Response shape of `GET /rest/api/latest/project`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: ProjectsList,
}

/// Response shape of `GET /rest/api/latest/plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlansResponse {
    #[serde(default)]
    pub plans: PlansList,
}
