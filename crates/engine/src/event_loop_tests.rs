// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use async_trait::async_trait;
use decree_core::{Command, FakeClock, WorkItem, WorkItemStatus};
use parking_lot::Mutex;

struct RecordingExecutor {
    executed: Mutex<Vec<Command>>,
    next_events: Mutex<Vec<Event>>,
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn execute(&self, command: Command) -> Vec<Event> {
        self.executed.lock().push(command);
        std::mem::take(&mut self.next_events.lock())
    }
}

fn work_item(id: &str, status: WorkItemStatus) -> WorkItem {
    WorkItem {
        id: id.into(),
        title: "t".into(),
        body: None,
        priority: None,
        complexity: None,
        created_at_ms: 0,
        status,
        blocked_by: vec![],
        linked_revision: None,
    }
}

#[tokio::test]
async fn processing_an_event_updates_state_via_the_reducer() {
    let store = StateStore::default();
    let executor = Arc::new(RecordingExecutor { executed: Mutex::new(vec![]), next_events: Mutex::new(vec![]) });
    let event_loop = EventLoop::new(store.clone(), FakeClock::new(), executor);

    let handle = event_loop.handle();
    handle.enqueue(Event::WorkItemChanged { id: "1".into(), new: Some(work_item("1", WorkItemStatus::Ready)) });
    drop(handle);

    let mut event_loop = event_loop;
    event_loop.drain_pending().await;

    assert_eq!(store.get_state().work_items.len(), 1);
}

#[tokio::test]
async fn executor_produced_events_re_enter_the_queue() {
    let store = StateStore::default();
    let follow_up = Event::WorkItemChanged { id: "2".into(), new: Some(work_item("2", WorkItemStatus::Ready)) };
    let executor = Arc::new(RecordingExecutor {
        executed: Mutex::new(vec![]),
        next_events: Mutex::new(vec![follow_up]),
    });
    let mut event_loop = EventLoop::new(store.clone(), FakeClock::new(), executor);

    // user_dispatch handler turns this into at least one command, which
    // our recording executor turns into the queued follow-up event.
    event_loop.handle().enqueue(Event::UserTransitionedStatus {
        work_item_id: "1".into(),
        new_status: WorkItemStatus::Blocked,
    });
    event_loop.drain_pending().await;
    event_loop.drain_pending().await;

    assert!(store.get_state().work_items.contains_key("2"));
}
