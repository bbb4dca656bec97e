// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::{event::PlannerResult, SessionId, Spec};

fn approved_spec(path: &str, sha: &str) -> Spec {
    Spec { file_path: path.into(), blob_sha: sha.into(), frontmatter_status: FrontmatterStatus::Approved }
}

#[test]
fn spec_changed_requests_planner_when_unplanned() {
    let mut state = EngineState::new();
    state.specs.insert("a.md".into(), approved_spec("a.md", "sha1"));
    let event = Event::SpecChanged { spec: approved_spec("a.md", "sha1") };
    let commands = handle(&event, &state);
    assert_eq!(
        commands,
        vec![Command::RequestPlannerRun { spec_paths: vec!["a.md".to_string()] }]
    );
}

#[test]
fn spec_changed_skips_when_already_planned_at_that_sha() {
    let mut state = EngineState::new();
    state.specs.insert("a.md".into(), approved_spec("a.md", "sha1"));
    state.last_planned_shas.insert("a.md".into(), "sha1".into());
    let event = Event::SpecChanged { spec: approved_spec("a.md", "sha1") };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn draft_spec_changed_never_requests_planner() {
    let state = EngineState::new();
    let mut spec = approved_spec("a.md", "sha1");
    spec.frontmatter_status = FrontmatterStatus::Draft;
    let event = Event::SpecChanged { spec };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn planner_completed_follows_up_when_specs_remain() {
    let mut state = EngineState::new();
    state.specs.insert("a.md".into(), approved_spec("a.md", "sha1"));
    state.specs.insert("b.md".into(), approved_spec("b.md", "sha2"));
    state.last_planned_shas.insert("a.md".into(), "sha1".into());
    let event = Event::PlannerCompleted {
        session_id: SessionId::new(),
        spec_paths: vec!["a.md".to_string()],
        result: PlannerResult { create: vec![], close: vec![], update: vec![] },
    };
    let commands = handle(&event, &state);
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[1], Command::RequestPlannerRun { .. }));
    if let Command::RequestPlannerRun { spec_paths } = &commands[1] {
        assert_eq!(spec_paths, &vec!["b.md".to_string()]);
    }
}

#[test]
fn planner_completed_has_no_followup_when_nothing_remains() {
    let mut state = EngineState::new();
    state.specs.insert("a.md".into(), approved_spec("a.md", "sha1"));
    state.last_planned_shas.insert("a.md".into(), "sha1".into());
    let event = Event::PlannerCompleted {
        session_id: SessionId::new(),
        spec_paths: vec!["a.md".to_string()],
        result: PlannerResult { create: vec![], close: vec![], update: vec![] },
    };
    assert_eq!(handle(&event, &state).len(), 1);
}
