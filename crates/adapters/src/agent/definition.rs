// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent definition loading: `<repo>/.claude/agents/<role>.md`,
//! YAML frontmatter plus a markdown system-prompt body.

use crate::error::AdapterError;
use decree_core::Role;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Sonnet,
    Opus,
    Haiku,
    Inherit,
}

#[derive(Debug, Deserialize)]
struct Frontmatter {
    description: String,
    #[serde(default)]
    tools: Vec<String>,
    #[serde(default, rename = "disallowedTools")]
    disallowed_tools: Vec<String>,
    #[serde(default = "default_model")]
    model: Model,
    #[serde(default, rename = "maxTurns")]
    max_turns: Option<u32>,
}

fn default_model() -> Model {
    Model::Inherit
}

#[derive(Debug, Clone)]
pub struct AgentDefinition {
    pub description: String,
    pub tools: Vec<String>,
    pub disallowed_tools: Vec<String>,
    pub model: Model,
    pub max_turns: Option<u32>,
    pub system_prompt: String,
}

fn agent_definition_path(repo: &Path, role: Role) -> std::path::PathBuf {
    repo.join(".claude").join("agents").join(format!("{role}.md"))
}

/// Splits a markdown file with a leading `---\n...\n---` YAML frontmatter
/// block from its body. Returns `(frontmatter_yaml, body)`.
fn split_frontmatter(raw: &str) -> Result<(&str, &str), AdapterError> {
    let rest = raw
        .strip_prefix("---\n")
        .ok_or_else(|| AdapterError::Definition("missing YAML frontmatter delimiter".into()))?;
    let end = rest
        .find("\n---")
        .ok_or_else(|| AdapterError::Definition("unterminated YAML frontmatter".into()))?;
    let (frontmatter, remainder) = rest.split_at(end);
    let body = remainder.strip_prefix("\n---").unwrap_or(remainder);
    Ok((frontmatter, body.trim_start_matches('\n')))
}

pub fn parse_agent_definition(raw: &str) -> Result<AgentDefinition, AdapterError> {
    let (frontmatter_yaml, body) = split_frontmatter(raw)?;
    let frontmatter: Frontmatter = serde_yaml::from_str(frontmatter_yaml)
        .map_err(|e| AdapterError::Definition(format!("invalid frontmatter: {e}")))?;
    Ok(AgentDefinition {
        description: frontmatter.description,
        tools: frontmatter.tools,
        disallowed_tools: frontmatter.disallowed_tools,
        model: frontmatter.model,
        max_turns: frontmatter.max_turns,
        system_prompt: body.to_string(),
    })
}

pub async fn load_agent_definition(repo: &Path, role: Role) -> Result<AgentDefinition, AdapterError> {
    let path = agent_definition_path(repo, role);
    let raw = tokio::fs::read_to_string(&path).await?;
    parse_agent_definition(&raw)
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
