// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn combined(state: CombinedStatusState, total_count: u32) -> CombinedStatus {
    CombinedStatus { state, total_count }
}

#[test]
fn failing_check_run_wins_over_everything() {
    let runs = vec![CheckRun {
        name: "lint".into(),
        url: Some("https://ci/lint".into()),
        conclusion: Some(CheckRunConclusion::Failure),
    }];
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Success, 1), &runs);
    assert_eq!(pipeline.status, PipelineStatus::Failure);
    assert_eq!(pipeline.url.as_deref(), Some("https://ci/lint"));
}

#[test]
fn cancelled_and_timed_out_also_count_as_failure() {
    for conclusion in [CheckRunConclusion::Cancelled, CheckRunConclusion::TimedOut] {
        let runs = vec![CheckRun { name: "build".into(), url: None, conclusion: Some(conclusion) }];
        let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Success, 1), &runs);
        assert_eq!(pipeline.status, PipelineStatus::Failure);
    }
}

#[test]
fn combined_failure_with_no_failing_check_runs_is_failure() {
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Failure, 1), &[]);
    assert_eq!(pipeline.status, PipelineStatus::Failure);
}

#[test]
fn incomplete_check_run_is_pending() {
    let runs = vec![CheckRun { name: "build".into(), url: None, conclusion: None }];
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Success, 1), &runs);
    assert_eq!(pipeline.status, PipelineStatus::Pending);
}

#[test]
fn pending_combined_status_with_checks_registered_is_pending() {
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Pending, 2), &[]);
    assert_eq!(pipeline.status, PipelineStatus::Pending);
}

#[test]
fn no_checks_configured_at_all_is_pending() {
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Success, 0), &[]);
    assert_eq!(pipeline.status, PipelineStatus::Pending);
    assert_eq!(pipeline.reason.as_deref(), Some("no checks configured"));
}

#[test]
fn all_green_is_success() {
    let runs = vec![CheckRun {
        name: "build".into(),
        url: None,
        conclusion: Some(CheckRunConclusion::Success),
    }];
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Success, 1), &runs);
    assert_eq!(pipeline.status, PipelineStatus::Success);
}

#[test]
fn neutral_and_skipped_conclusions_do_not_block_success() {
    let runs = vec![
        CheckRun { name: "a".into(), url: None, conclusion: Some(CheckRunConclusion::Neutral) },
        CheckRun { name: "b".into(), url: None, conclusion: Some(CheckRunConclusion::Skipped) },
    ];
    let pipeline = derive_pipeline_status(&combined(CombinedStatusState::Success, 2), &runs);
    assert_eq!(pipeline.status, PipelineStatus::Success);
}
