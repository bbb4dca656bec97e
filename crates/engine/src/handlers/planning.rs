// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use decree_core::{Command, EngineState, Event, FrontmatterStatus};

/// Approved specs whose current blob SHA has not yet been planned against.
fn unplanned_approved_spec_paths(state: &EngineState) -> Vec<String> {
    state
        .specs
        .values()
        .filter(|spec| spec.frontmatter_status == FrontmatterStatus::Approved)
        .filter(|spec| state.last_planned_shas.get(&spec.file_path) != Some(&spec.blob_sha))
        .map(|spec| spec.file_path.clone())
        .collect()
}

pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    match event {
        Event::SpecChanged { spec } => {
            if spec.frontmatter_status != FrontmatterStatus::Approved {
                return Vec::new();
            }
            if state.last_planned_shas.get(&spec.file_path) == Some(&spec.blob_sha) {
                return Vec::new();
            }
            vec![Command::RequestPlannerRun { spec_paths: unplanned_approved_spec_paths(state) }]
        }

        Event::PlannerCompleted { session_id, spec_paths, result } => {
            let mut commands = vec![Command::ApplyPlannerResult {
                session_id: session_id.clone(),
                spec_paths: spec_paths.clone(),
                result: result.clone(),
            }];
            let remaining = unplanned_approved_spec_paths(state);
            if !remaining.is_empty() {
                commands.push(Command::RequestPlannerRun { spec_paths: remaining });
            }
            commands
        }

        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "planning_tests.rs"]
mod tests;
