// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::test_support::work_item_fixture;

#[test]
fn pending_item_with_no_dependencies_becomes_ready() {
    let state = EngineState::new();
    let item = work_item_fixture("1", WorkItemStatus::Pending);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "1".into(), new_status: WorkItemStatus::Ready }]
    );
}

#[test]
fn pending_item_with_open_dependency_stays_pending() {
    let mut state = EngineState::new();
    state.work_items.insert("dep".into(), work_item_fixture("dep", WorkItemStatus::InProgress));
    let mut item = work_item_fixture("1", WorkItemStatus::Pending);
    item.blocked_by = vec!["dep".into()];
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn non_pending_statuses_are_ignored() {
    let state = EngineState::new();
    let item = work_item_fixture("1", WorkItemStatus::Ready);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn deletion_event_is_ignored() {
    let state = EngineState::new();
    let event = Event::WorkItemChanged { id: "1".into(), new: None };
    assert!(handle(&event, &state).is_empty());
}
