// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn work_item_fixture_is_ready_when_requested() {
    let w = work_item_fixture("1", WorkItemStatus::Ready);
    assert_eq!(w.status, WorkItemStatus::Ready);
    assert_eq!(w.id, "1");
}
