// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::test_support::work_item_fixture;

#[test]
fn closing_a_dependency_unblocks_its_dependent() {
    let mut state = EngineState::new();
    let mut dependent = work_item_fixture("dependent", WorkItemStatus::Pending);
    dependent.blocked_by = vec!["dep".into()];
    state.work_items.insert("dependent".into(), dependent);

    let dep = work_item_fixture("dep", WorkItemStatus::Closed);
    state.work_items.insert("dep".into(), dep.clone());

    let event = Event::WorkItemChanged { id: "dep".into(), new: Some(dep) };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "dependent".into(), new_status: WorkItemStatus::Ready }]
    );
}

#[test]
fn dependent_with_other_still_open_dependency_stays_blocked() {
    let mut state = EngineState::new();
    let mut dependent = work_item_fixture("dependent", WorkItemStatus::Pending);
    dependent.blocked_by = vec!["dep1".into(), "dep2".into()];
    state.work_items.insert("dependent".into(), dependent);
    state.work_items.insert("dep2".into(), work_item_fixture("dep2", WorkItemStatus::InProgress));

    let dep1 = work_item_fixture("dep1", WorkItemStatus::Closed);
    state.work_items.insert("dep1".into(), dep1.clone());

    let event = Event::WorkItemChanged { id: "dep1".into(), new: Some(dep1) };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn non_terminal_status_change_has_no_effect() {
    let state = EngineState::new();
    let item = work_item_fixture("dep", WorkItemStatus::InProgress);
    let event = Event::WorkItemChanged { id: "dep".into(), new: Some(item) };
    assert!(handle(&event, &state).is_empty());
}
