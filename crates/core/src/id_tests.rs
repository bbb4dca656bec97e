// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn session_id_round_trips_through_prefix() {
    let id = SessionId::new();
    assert!(id.as_str().starts_with(SessionId::PREFIX));
    let parsed = SessionId::from_string(id.as_str());
    assert_eq!(id, parsed);
}

#[test]
fn session_id_serde_roundtrip() {
    let id = SessionId::from_string("ses-abc123");
    let json = serde_json::to_string(&id).expect("serialize");
    let back: SessionId = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(id, back);
}
