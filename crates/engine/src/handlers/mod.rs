// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers: pure `(event, state) -> Vec<Command>` functions. The
//! executor runs every handler for every event and concatenates their
//! commands; handler ordering does not affect semantics.

pub mod dependency_resolution;
pub mod implementation;
pub mod orphan_recovery;
pub mod planning;
pub mod readiness;
pub mod review;
pub mod user_dispatch;

use decree_core::{Command, EngineState, Event};

type Handler = fn(&Event, &EngineState) -> Vec<Command>;

const HANDLERS: &[Handler] = &[
    planning::handle,
    readiness::handle,
    dependency_resolution::handle,
    implementation::handle,
    review::handle,
    orphan_recovery::handle,
    user_dispatch::handle,
];

/// Runs every registered handler against `(event, state)` and concatenates
/// their emitted commands, in handler-registration order. Handler order has
/// no semantic effect — it only determines command ordering within the
/// batch handed to the executor.
pub fn dispatch(event: &Event, state: &EngineState) -> Vec<Command> {
    HANDLERS.iter().flat_map(|handler| handler(event, state)).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
