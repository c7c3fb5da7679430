// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use slotcast_core::SharedFuture;
use std::time::Duration;
use tokio::time::sleep;

/// Panics if `future` resolves within `timeout_ms` milliseconds.
pub async fn assert_unresolved_for<T>(future: &SharedFuture<T>, timeout_ms: u64)
where
    T: Clone,
{
    tokio::select! {
        _value = future.resolved() => {
            panic!("unexpected resolution, expected the future to stay pending");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Awaits `future`, panicking if it takes longer than `timeout_ms`
/// milliseconds to resolve.
pub async fn expect_resolved_within<T>(future: &SharedFuture<T>, timeout_ms: u64) -> T
where
    T: Clone,
{
    tokio::select! {
        value = future.resolved() => value,
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("future did not resolve within {timeout_ms}ms");
        }
    }
}

/// Expects `future` to already be resolved, without suspending at all.
pub fn expect_already_resolved<T>(future: &SharedFuture<T>) -> T
where
    T: Clone,
{
    future
        .try_get()
        .expect("expected an already-resolved future")
}
