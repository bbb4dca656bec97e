// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The blocklist: ordered dangerous-pattern regexes, scanned against
//! the full (quote-masked) command string. A match here overrides the
//! allowlist check regardless of outcome.

use regex::Regex;
use std::sync::OnceLock;

const PATTERNS: &[(&str, &str)] = &[
    // destructive VCS
    ("git reset --hard", r"git\s+reset\s+--hard"),
    ("git clean -f", r"git\s+clean\s+-[a-zA-Z]*f"),
    ("git checkout .", r"git\s+checkout\s+\."),
    ("git restore .", r"git\s+restore\s+\."),
    ("git branch -D", r"git\s+branch\s+.*-D"),
    // file deletion
    ("rm ", r"rm\s"),
    // privilege escalation
    ("sudo", r"\bsudo\b"),
    // remote code execution
    ("piped download to shell", r"(curl|wget)\b[^\n|]*\|\s*(bash|sh|zsh)\b"),
    ("eval", r"\beval\b"),
    // system modification
    ("dd if=", r"dd\s+if="),
    ("mkfs", r"\bmkfs\b"),
    ("fdisk", r"\bfdisk\b"),
    ("chmod -R", r"chmod\s+-R"),
    ("chmod 777", r"chmod\s+777"),
    ("chmod o+w", r"chmod\s+\S*o\+w"),
    ("chmod a+w", r"chmod\s+\S*a\+w"),
    ("chown", r"\bchown\b"),
    // process management
    ("kill", r"\bkill\b"),
    ("pkill", r"\bpkill\b"),
    ("killall", r"\bkillall\b"),
];

#[allow(clippy::expect_used)]
fn compiled() -> &'static [(Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|(label, pattern)| (Regex::new(pattern).expect("blocklist pattern is valid regex"), *label))
            .collect()
    })
}

/// Returns the block reason for the first pattern (in declaration order)
/// that matches `masked_input`, or `None` if nothing matches.
pub fn first_match_reason(masked_input: &str) -> Option<String> {
    compiled()
        .iter()
        .find(|(regex, _)| regex.is_match(masked_input))
        .map(|(_, label)| format!("Blocked: matches dangerous pattern '{label}'"))
}

#[cfg(test)]
#[path = "blocklist_tests.rs"]
mod tests;
