//
//  atlassian-cli
//  api/bitbucket/pipelines.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! Bitbucket Cloud pipeline types.
//!
//! Pipelines model a three-level state: `state.name` is the coarse label,
//! `state.type` identifies the lifecycle phase, and `state.result` is only
//! populated once `state.type` indicates completion. A pending or running
//! pipeline has no result object at all.

use serde::{Deserialize, Serialize};

/// Wire value of `state.type` for a completed pipeline.
const STATE_TYPE_COMPLETED: &str = "pipeline_state_completed";

/// A pipeline run in Bitbucket Cloud.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pipeline {
    /// UUID of the run, curly braces included.
    #[serde(default)]
    pub uuid: String,

    /// Sequential run number within the repository.
    #[serde(default)]
    pub build_number: u64,

    #[serde(default)]
    pub state: PipelineState,

    /// What the pipeline ran against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PipelineTarget>,

    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    /// ISO 8601 completion timestamp; absent until finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<String>,

    /// Run duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<u64>,
}

/// Lifecycle state of a pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineState {
    /// Coarse label: `PENDING`, `IN_PROGRESS`, `COMPLETED`.
    #[serde(default)]
    pub name: String,

    /// Lifecycle discriminator, e.g. `pipeline_state_completed`.
    #[serde(rename = "type", default)]
    pub state_type: String,

    /// Outcome; only populated once the pipeline completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PipelineResult>,
}

impl PipelineState {
    /// Whether the lifecycle has reached completion.
    pub fn is_complete(&self) -> bool {
        self.state_type == STATE_TYPE_COMPLETED
    }
}

/// Outcome of a completed pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// `SUCCESSFUL`, `FAILED`, `STOPPED`, ...
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub result_type: String,
}

/// What a pipeline ran against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTarget {
    /// Target discriminator, e.g. `pipeline_ref_target`.
    #[serde(rename = "type", default)]
    pub target_type: String,

    /// Kind of ref, e.g. `branch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,

    /// Name of the ref, e.g. `main`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<TargetCommit>,
}

/// Hash-only commit reference inside a pipeline target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetCommit {
    #[serde(default)]
    pub hash: String,
}

/// Request payload for triggering a pipeline on a branch.
#[derive(Debug, Clone, Serialize)]
pub struct RunPipelineRequest {
    pub target: RunPipelineTarget,
}

impl RunPipelineRequest {
    /// Builds a trigger request for a branch.
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            target: RunPipelineTarget {
                ref_type: "branch".to_string(),
                target_type: "pipeline_ref_target".to_string(),
                ref_name: name.into(),
            },
        }
    }
}

/// Write-only target shape for triggering a pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct RunPipelineTarget {
    pub ref_type: String,

    #[serde(rename = "type")]
    pub target_type: String,

    pub ref_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_pipeline_has_no_result() {
        let json = r#"{
            "uuid": "{11111111-2222-3333-4444-555555555555}",
            "build_number": 12,
            "state": {
                "name": "IN_PROGRESS",
                "type": "pipeline_state_in_progress"
            },
            "target": {
                "type": "pipeline_ref_target",
                "ref_type": "branch",
                "ref_name": "main",
                "commit": {"hash": "abc123"}
            },
            "created_on": "2026-01-10T10:00:00.000Z"
        }"#;

        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert!(!pipeline.state.is_complete());
        assert!(pipeline.state.result.is_none());
        assert_eq!(
            pipeline.target.as_ref().unwrap().ref_name.as_deref(),
            Some("main")
        );
    }

    #[test]
    fn test_completed_pipeline_carries_result() {
        let json = r#"{
            "uuid": "{u}",
            "build_number": 13,
            "state": {
                "name": "COMPLETED",
                "type": "pipeline_state_completed",
                "result": {"name": "SUCCESSFUL", "type": "pipeline_state_completed_successful"}
            },
            "completed_on": "2026-01-10T10:05:00.000Z",
            "duration_in_seconds": 300
        }"#;

        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert!(pipeline.state.is_complete());
        assert_eq!(pipeline.state.result.as_ref().unwrap().name, "SUCCESSFUL");
        assert_eq!(pipeline.duration_in_seconds, Some(300));
    }

    #[test]
    fn test_run_request_wire_shape() {
        let request = RunPipelineRequest::branch("main");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"target":{"ref_type":"branch","type":"pipeline_ref_target","ref_name":"main"}}"#
        );
    }

    #[test]
    fn test_sparse_pipeline_defaults() {
        let pipeline: Pipeline = serde_json::from_str(r#"{"uuid": "{u}"}"#).unwrap();
        assert_eq!(pipeline.build_number, 0);
        assert_eq!(pipeline.state.name, "");
        assert!(!pipeline.state.is_complete());
        assert!(pipeline.target.is_none());

        let commit: TargetCommit = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(commit.hash, "");
    }

    #[test]
    fn test_pipeline_round_trip() {
        let json = r#"{
            "uuid": "{u}",
            "build_number": 14,
            "state": {"name": "PENDING", "type": "pipeline_state_pending"}
        }"#;
        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        let round: Pipeline =
            serde_json::from_str(&serde_json::to_string(&pipeline).unwrap()).unwrap();
        assert_eq!(round, pipeline);
    }
}
