// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline derivation: combines a provider's combined-status and
//! check-runs endpoints into the single `Pipeline` a `Revision` carries. A
//! concrete `RevisionProvider` calls this while assembling each `Revision`
//! it returns; it is pure and has no I/O of its own.

use decree_core::{Pipeline, PipelineStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckRunConclusion {
    Success,
    Failure,
    Cancelled,
    TimedOut,
    Neutral,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRun {
    pub name: String,
    pub url: Option<String>,
    /// `None` while the run is in progress (not yet `completed`).
    pub conclusion: Option<CheckRunConclusion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinedStatusState {
    Success,
    Failure,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedStatus {
    pub state: CombinedStatusState,
    pub total_count: u32,
}

/// Applies the precedence rules in order; the first that matches wins.
pub fn derive_pipeline_status(combined: &CombinedStatus, check_runs: &[CheckRun]) -> Pipeline {
    if let Some(run) = check_runs.iter().find(|run| {
        matches!(
            run.conclusion,
            Some(CheckRunConclusion::Failure | CheckRunConclusion::Cancelled | CheckRunConclusion::TimedOut)
        )
    }) {
        return Pipeline {
            status: PipelineStatus::Failure,
            url: run.url.clone(),
            reason: Some(format!("{} failed", run.name)),
        };
    }

    if combined.state == CombinedStatusState::Failure {
        return Pipeline { status: PipelineStatus::Failure, url: None, reason: None };
    }

    if check_runs.iter().any(|run| run.conclusion.is_none()) {
        return Pipeline { status: PipelineStatus::Pending, url: None, reason: None };
    }

    if combined.state == CombinedStatusState::Pending && combined.total_count > 0 {
        return Pipeline { status: PipelineStatus::Pending, url: None, reason: None };
    }

    if combined.total_count == 0 && check_runs.is_empty() {
        return Pipeline { status: PipelineStatus::Pending, url: None, reason: Some("no checks configured".into()) };
    }

    Pipeline { status: PipelineStatus::Success, url: None, reason: None }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
