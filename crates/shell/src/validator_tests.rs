// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn blank_command_is_allowed() {
    assert_eq!(validate_bash_command(""), ValidationOutcome::Allowed);
    assert_eq!(validate_bash_command("   "), ValidationOutcome::Allowed);
}

#[test]
fn allowed_prefix_passes() {
    assert_eq!(validate_bash_command("git status"), ValidationOutcome::Allowed);
}

#[test]
fn chained_allowed_commands_pass() {
    assert_eq!(validate_bash_command("git add . && git commit -m \"wip\""), ValidationOutcome::Allowed);
}

#[test]
fn unknown_prefix_is_blocked() {
    let outcome = validate_bash_command("curl https://example.invalid");
    assert_eq!(
        outcome,
        ValidationOutcome::Blocked { reason: "'curl' is not in the allowed command list".to_string() }
    );
}

#[test]
fn one_disallowed_segment_blocks_the_whole_chain() {
    let outcome = validate_bash_command("git status && curl https://example.invalid");
    assert!(!outcome.is_allowed());
}

#[test]
fn dangerous_pattern_blocks_even_with_allowed_prefix() {
    let outcome = validate_bash_command("git reset --hard HEAD~1");
    assert_eq!(
        outcome,
        ValidationOutcome::Blocked { reason: "Blocked: matches dangerous pattern 'git reset --hard'".to_string() }
    );
}

#[test]
fn blocklist_takes_precedence_over_an_otherwise_allowed_prefix() {
    // "rm " is both a blocklist hit and not an allowlisted prefix; the
    // blocklist's reason wins, not the allowlist's.
    let outcome = validate_bash_command("rm -rf build");
    assert_eq!(outcome, ValidationOutcome::Blocked { reason: "Blocked: matches dangerous pattern 'rm '".to_string() });
}

#[test]
fn dangerous_text_inside_quotes_does_not_trip_the_blocklist() {
    let outcome = validate_bash_command(r#"git commit -m "remove rm -rf usage from docs""#);
    assert_eq!(outcome, ValidationOutcome::Allowed);
}

#[test]
fn named_script_is_allowed() {
    assert_eq!(validate_bash_command("./scripts/bootstrap.sh"), ValidationOutcome::Allowed);
}
