// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured-output validation: parses an agent session's final
//! JSON output against the schema for its role.

use crate::error::AdapterError;
use decree_core::event::{ImplementorResult, PlannerResult, ReviewerResult};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StructuredOutput {
    Planner(PlannerResult),
    Implementor(ImplementorResult),
    Reviewer(ReviewerResult),
}

/// Parses and validates `raw` against the schema for `role`, where `role` is
/// the lowercase role name (`"planner"`, `"implementor"`, `"reviewer"`) the
/// session was started with — used only to produce a clearer error message
/// on a role/tag mismatch.
pub fn parse_structured_output(role: &str, raw: &str) -> Result<StructuredOutput, AdapterError> {
    let output: StructuredOutput = serde_json::from_str(raw)
        .map_err(|e| AdapterError::SchemaMismatch { role: role.to_string(), reason: e.to_string() })?;

    let matches_role = matches!(
        (&output, role),
        (StructuredOutput::Planner(_), "planner")
            | (StructuredOutput::Implementor(_), "implementor")
            | (StructuredOutput::Reviewer(_), "reviewer")
    );
    if !matches_role {
        return Err(AdapterError::SchemaMismatch {
            role: role.to_string(),
            reason: "output's role tag does not match the session's role".to_string(),
        });
    }

    Ok(output)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
