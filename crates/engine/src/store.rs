// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State store: a single process-wide snapshot plus its observers.
//! The store enforces no domain rules — it is purely a container the
//! reducer and executor share.

use decree_core::EngineState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

type Observer = Box<dyn Fn(&EngineState) + Send + Sync>;

struct Inner {
    state: EngineState,
    observers: Vec<(u64, Observer)>,
}

/// Process-wide snapshot holder. Cloning a `StateStore` shares the same
/// underlying state — it is itself a handle, not a copy.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<Mutex<Inner>>,
    next_observer_id: Arc<AtomicU64>,
}

impl StateStore {
    pub fn new(initial: EngineState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { state: initial, observers: Vec::new() })),
            next_observer_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn get_state(&self) -> EngineState {
        self.inner.lock().state.clone()
    }

    /// Replaces the whole snapshot and notifies observers synchronously,
    /// in subscription order, before returning.
    pub fn set_state(&self, next: EngineState) {
        let mut guard = self.inner.lock();
        guard.state = next;
        let snapshot = guard.state.clone();
        for (_, observer) in &guard.observers {
            observer(&snapshot);
        }
    }

    /// Registers an observer, called synchronously on every `set_state`.
    /// Dropping the returned [`Unsubscribe`] guard removes it.
    pub fn subscribe(&self, observer: impl Fn(&EngineState) + Send + Sync + 'static) -> Unsubscribe {
        let id = self.next_observer_id.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().observers.push((id, Box::new(observer)));
        Unsubscribe { store: self.inner.clone(), id }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(EngineState::new())
    }
}

/// RAII guard: the observer is removed from the store when this is dropped.
pub struct Unsubscribe {
    store: Arc<Mutex<Inner>>,
    id: u64,
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        self.store.lock().observers.retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
