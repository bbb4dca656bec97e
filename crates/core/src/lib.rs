// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! decree-core: the shared data model for the decree control plane —
//! work items, revisions, specs, agent runs, and the events/commands that
//! move between them.

pub mod macros;

pub mod agent_run;
pub mod clock;
pub mod closing_keywords;
pub mod command;
pub mod dependency_metadata;
pub mod error;
pub mod event;
pub mod id;
pub mod revision;
pub mod spec;
pub mod state;
pub mod work_item;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use agent_run::{AgentRun, AgentRunStatus, AgentStartParams, FailReason, Role, RoleFields};
pub use clock::{Clock, FakeClock, SystemClock};
pub use closing_keywords::match_closing_keyword;
pub use command::Command;
pub use dependency_metadata::{format_blocked_by_marker, parse_blocked_by_marker};
pub use error::{ErrorEntry, ErrorKind, EngineError, RetryableError};
pub use event::{Event, Review};
pub use id::SessionId;
pub use revision::{Pipeline, PipelineStatus, Revision, RevisionFile, RevisionFileStatus, ReviewHistory};
pub use spec::{FrontmatterStatus, Spec};
pub use state::EngineState;
pub use work_item::{Priority, WorkItem, WorkItemStatus};
