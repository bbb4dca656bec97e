// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn error_kind_maps_from_variant() {
    assert_eq!(EngineError::Provider("x".into()).kind(), ErrorKind::Provider);
    assert_eq!(EngineError::Rejected("x".into()).kind(), ErrorKind::Rejected);
}
