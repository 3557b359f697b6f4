// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    loading = { Status::Loading, false },
    success = { Status::Success(1), true },
    error = { Status::Error("boom".into()), true },
)]
fn terminal_variants(status: Status<i32>, expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[test]
fn accessors() {
    let ok: Status<i32> = Status::Success(7);
    assert_eq!(ok.data(), Some(&7));
    assert_eq!(ok.error(), None);

    let err: Status<i32> = Status::Error("Not Found".into());
    assert_eq!(err.data(), None);
    assert_eq!(err.error(), Some("Not Found"));
}

#[test]
fn serializes_as_tagged() {
    let json = serde_json::to_value(Status::Success(vec!["tt1"])).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"][0], "tt1");

    let json = serde_json::to_value(Status::<()>::Loading).unwrap();
    assert_eq!(json["status"], "loading");

    let json = serde_json::to_value(Status::<()>::Error("Not Found".into())).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["data"], "Not Found");
}
