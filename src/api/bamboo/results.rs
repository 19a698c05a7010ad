//
//  atlassian-cli
//  api/bamboo/results.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bamboo build result, change, and log types.

use serde::{Deserialize, Serialize};

use super::paged::PagedList;
use crate::api::common::Link;

/// Paged list of [`BuildResult`]s, item key `result`.
pub type ResultsList = PagedList<ResultEntries>;

/// Paged list of [`StageResult`]s, item key `stage`.
pub type StageResultsList = PagedList<StageResultEntries>;

/// Paged list of [`Change`]s, item key `change`.
pub type ChangesList = PagedList<ChangeEntries>;

/// Paged list of [`LogEntry`]s, item key `logEntry`.
pub type LogEntriesList = PagedList<LogEntryEntries>;

/// Item key for build result lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultEntries {
    #[serde(default)]
    pub result: Vec<BuildResult>,
}

/// Item key for stage result lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StageResultEntries {
    #[serde(default)]
    pub stage: Vec<StageResult>,
}

/// Item key for change lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeEntries {
    #[serde(default)]
    pub change: Vec<Change>,
}

/// Item key for log entry lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogEntryEntries {
    #[serde(default, rename = "logEntry")]
    pub log_entry: Vec<LogEntry>,
}

/// A single build execution of a plan or branch plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Result key, e.g. `PROJ-PLAN-42`.
    #[serde(
        default,
        rename = "buildResultKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_result_key: Option<String>,

    /// Sequential build number within the plan.
    #[serde(default, rename = "buildNumber")]
    pub build_number: u32,

    /// Final verdict: `Successful`, `Failed`, or `Unknown` while running.
    #[serde(default, rename = "buildState")]
    pub build_state: String,

    /// Lifecycle: `Queued`, `InProgress`, `Finished`, `NotBuilt`.
    #[serde(default, rename = "lifeCycleState")]
    pub life_cycle_state: String,

    #[serde(
        default,
        rename = "buildStartedTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_started_time: Option<String>,

    #[serde(
        default,
        rename = "buildCompletedTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_completed_time: Option<String>,

    /// Human-readable duration, e.g. `2 minutes`.
    #[serde(
        default,
        rename = "buildDurationDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_duration_description: Option<String>,

    /// What triggered the build.
    #[serde(
        default,
        rename = "buildReason",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_reason: Option<String>,

    #[serde(default)]
    pub successful: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// Per-stage outcomes, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<StageResultsList>,

    /// Commits included in this build, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangesList>,

    /// Build log lines, only present when explicitly expanded.
    #[serde(
        default,
        rename = "logEntries",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_entries: Option<LogEntriesList>,
}

/// Outcome of one stage within a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageResult {
    #[serde(default)]
    pub name: String,

    /// `Successful` or `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(
        default,
        rename = "lifeCycleState",
        skip_serializing_if = "Option::is_none"
    )]
    pub life_cycle_state: Option<String>,
}

/// A commit picked up by a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub author: String,

    /// VCS revision identifier.
    #[serde(default, rename = "changesetId")]
    pub changeset_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Commit message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One line of build log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub log: String,

    /// Epoch milliseconds of the log line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,

    #[serde(
        default,
        rename = "formattedDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_date: Option<String>,
}

/// Response shape of `GET /rest/api/latest/result/{planKey}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: ResultsList,
}

/// Response shape of `POST /rest/api/latest/queue/{planKey}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedBuild {
    /// Key of the plan that was queued.
    #[serde(default, rename = "planKey")]
    pub plan_key: String,

    /// Number assigned to the queued build.
    #[serde(default, rename = "buildNumber")]
    pub build_number: u32,

    /// Full result key of the queued build.
    #[serde(
        default,
        rename = "buildResultKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_result_key: Option<String>,

    #[serde(
        default,
        rename = "triggerReason",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_result_nested_lists() {
        let json = r#"{
            "buildResultKey": "PROJ-PLAN-42",
            "buildNumber": 42,
            "buildState": "Failed",
            "lifeCycleState": "Finished",
            "buildStartedTime": "2026-01-10T10:00:00.000Z",
            "buildCompletedTime": "2026-01-10T10:02:00.000Z",
            "buildDurationDescription": "2 minutes",
            "successful": false,
            "stages": {
                "size": 2, "start-index": 0, "max-result": 25,
                "stage": [
                    {"name": "Compile", "state": "Successful"},
                    {"name": "Test", "state": "Failed"}
                ]
            },
            "changes": {
                "size": 1, "start-index": 0, "max-result": 25,
                "change": [{"author": "adoe", "changesetId": "abc123",
                            "comment": "Fix flaky test"}]
            }
        }"#;

        let result: BuildResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.build_number, 42);
        assert_eq!(result.build_state, "Failed");
        assert!(!result.successful);

        let stages = &result.stages.as_ref().unwrap().entries.stage;
        assert_eq!(stages[0].state.as_deref(), Some("Successful"));
        assert_eq!(stages[1].state.as_deref(), Some("Failed"));

        let changes = &result.changes.as_ref().unwrap().entries.change;
        assert_eq!(changes[0].changeset_id, "abc123");
        assert!(result.log_entries.is_none());
    }

    #[test]
    fn test_log_entries_wire_key() {
        let json = r#"{
            "buildNumber": 7,
            "buildState": "Successful",
            "lifeCycleState": "Finished",
            "successful": true,
            "logEntries": {
                "size": 1, "start-index": 0, "max-result": 100,
                "logEntry": [{"log": "Build succeeded", "date": 1767868800000}]
            }
        }"#;

        let result: BuildResult = serde_json::from_str(json).unwrap();
        let logs = &result.log_entries.as_ref().unwrap().entries.log_entry;
        assert_eq!(logs[0].log, "Build succeeded");
        assert_eq!(logs[0].date, Some(1767868800000));
    }

    #[test]
    fn test_build_result_round_trip() {
        let json = r#"{
            "buildResultKey": "PROJ-PLAN-42",
            "buildNumber": 42,
            "buildState": "Successful",
            "lifeCycleState": "Finished",
            "successful": true
        }"#;
        let result: BuildResult = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out["buildNumber"], 42);
        assert_eq!(out["lifeCycleState"], "Finished");

        let round: BuildResult = serde_json::from_value(out).unwrap();
        assert_eq!(round, result);
    }

    #[test]
    fn test_queued_build_response() {
        let json = r#"{
            "planKey": "PROJ-PLAN",
            "buildNumber": 43,
            "buildResultKey": "PROJ-PLAN-43",
            "triggerReason": "Manual build"
        }"#;
        let queued: QueuedBuild = serde_json::from_str(json).unwrap();
        assert_eq!(queued.plan_key, "PROJ-PLAN");
        assert_eq!(queued.build_number, 43);
    }

    #[test]
    fn test_results_response_envelope() {
        let json = r#"{
            "results": {
                "size": 1, "start-index": 0, "max-result": 25,
                "result": [{"buildNumber": 1, "buildState": "Successful",
                            "lifeCycleState": "Finished", "successful": true}]
            }
        }"#;
        let response: ResultsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.entries.result[0].build_number, 1);
    }
}
