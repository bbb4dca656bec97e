// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::{WorkItem, WorkItemStatus};
use std::sync::atomic::AtomicUsize;

fn work_item(id: &str) -> WorkItem {
    WorkItem {
        id: id.into(),
        title: "t".into(),
        body: None,
        priority: None,
        complexity: None,
        created_at_ms: 0,
        status: WorkItemStatus::Pending,
        blocked_by: vec![],
        linked_revision: None,
    }
}

#[test]
fn observers_see_each_set_state_synchronously() {
    let store = StateStore::default();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen2 = seen.clone();
    let _guard = store.subscribe(move |_| {
        seen2.fetch_add(1, Ordering::Relaxed);
    });

    let mut state = store.get_state();
    state.work_items.insert("1".into(), work_item("1"));
    store.set_state(state);

    assert_eq!(seen.load(Ordering::Relaxed), 1);
}

#[test]
fn dropping_guard_unsubscribes() {
    let store = StateStore::default();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen2 = seen.clone();
    let guard = store.subscribe(move |_| {
        seen2.fetch_add(1, Ordering::Relaxed);
    });
    drop(guard);

    store.set_state(store.get_state());
    assert_eq!(seen.load(Ordering::Relaxed), 0);
}

#[test]
fn get_state_reflects_latest_set_state() {
    let store = StateStore::default();
    let mut state = store.get_state();
    state.work_items.insert("1".into(), work_item("1"));
    store.set_state(state);
    assert_eq!(store.get_state().work_items.len(), 1);
}
