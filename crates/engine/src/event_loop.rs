// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event loop: a single-threaded cooperative loop over an unbounded,
//! strictly ordered event queue. Each event in turn runs through the reducer
//! (state transition), the handlers (pure `(event, state) -> Vec<Command>`),
//! and the executor (side effects); any events the executor produces for
//! that batch re-enter the queue at its tail rather than being recursed into
//! immediately, so processing order stays FIFO however deep a reaction goes.

use crate::executor::Executor;
use crate::handlers;
use crate::reducer::reduce;
use crate::store::StateStore;
use decree_core::{Clock, Event};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// A cloneable handle for enqueuing events onto a running [`EventLoop`] from
/// the pollers/reconciler or from user-facing entry points, without holding
/// the loop itself.
#[derive(Clone)]
pub struct EventLoopHandle {
    queue_tx: mpsc::UnboundedSender<Event>,
}

impl EventLoopHandle {
    /// Enqueues `event` at the tail of the queue. A no-op if the loop has
    /// already shut down.
    pub fn enqueue(&self, event: Event) {
        let _ = self.queue_tx.send(event);
    }
}

pub struct EventLoop<C: Clock> {
    store: StateStore,
    clock: C,
    executor: Arc<dyn Executor>,
    queue_tx: mpsc::UnboundedSender<Event>,
    queue_rx: mpsc::UnboundedReceiver<Event>,
}

impl<C: Clock> EventLoop<C> {
    pub fn new(store: StateStore, clock: C, executor: Arc<dyn Executor>) -> Self {
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        Self { store, clock, executor, queue_tx, queue_rx }
    }

    pub fn handle(&self) -> EventLoopHandle {
        EventLoopHandle { queue_tx: self.queue_tx.clone() }
    }

    /// Runs until `shutdown` fires or every [`EventLoopHandle`] (and the
    /// loop's own retained sender) has been dropped.
    pub async fn run(mut self, shutdown: CancellationToken) {
        loop {
            let event = tokio::select! {
                _ = shutdown.cancelled() => return,
                event = self.queue_rx.recv() => match event {
                    Some(event) => event,
                    None => return,
                },
            };
            self.process_one(event).await;
        }
    }

    /// Drains the queue without blocking, for callers (startup) that need
    /// the synchronous pollers' initial observations folded into state
    /// before anything else runs.
    pub async fn drain_pending(&mut self) {
        while let Ok(event) = self.queue_rx.try_recv() {
            self.process_one(event).await;
        }
    }

    async fn process_one(&self, event: Event) {
        let span = tracing::info_span!("event_loop.process", event = event_label(&event));
        let _enter = span.enter();

        let now_ms = self.clock.epoch_ms();
        let next = reduce(&self.store.get_state(), &event, now_ms);
        self.store.set_state(next);

        let commands = handlers::dispatch(&event, &self.store.get_state());
        if commands.is_empty() {
            return;
        }

        let produced = self.executor.execute_all(commands).await;
        for event in produced {
            let _ = self.queue_tx.send(event);
        }
    }
}

fn event_label(event: &Event) -> &'static str {
    match event {
        Event::WorkItemChanged { .. } => "workItemChanged",
        Event::RevisionChanged { .. } => "revisionChanged",
        Event::SpecChanged { .. } => "specChanged",
        Event::PlannerRequested { .. } => "plannerRequested",
        Event::PlannerStarted { .. } => "plannerStarted",
        Event::PlannerCompleted { .. } => "plannerCompleted",
        Event::PlannerFailed { .. } => "plannerFailed",
        Event::ImplementorRequested { .. } => "implementorRequested",
        Event::ImplementorStarted { .. } => "implementorStarted",
        Event::ImplementorCompleted { .. } => "implementorCompleted",
        Event::ImplementorFailed { .. } => "implementorFailed",
        Event::ReviewerRequested { .. } => "reviewerRequested",
        Event::ReviewerStarted { .. } => "reviewerStarted",
        Event::ReviewerCompleted { .. } => "reviewerCompleted",
        Event::ReviewerFailed { .. } => "reviewerFailed",
        Event::CommandRejected { .. } => "commandRejected",
        Event::CommandFailed { .. } => "commandFailed",
        Event::UserRequestedImplementorRun { .. } => "userRequestedImplementorRun",
        Event::UserCancelledRun { .. } => "userCancelledRun",
        Event::UserTransitionedStatus { .. } => "userTransitionedStatus",
    }
}

#[cfg(test)]
#[path = "event_loop_tests.rs"]
mod tests;
