// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation token.
//!
//! Bounded waits accept a [`CancellationToken`] to let an external party
//! abort the wait. Cancelling only ever affects the callers observing the
//! token - a value source being awaited, and every other waiter on it,
//! are untouched.

use event_listener::Event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Clonable handle to a shared cancellation state.
///
/// All clones observe the same state: once any of them calls
/// [`cancel`](Self::cancel), every pending and future
/// [`cancelled`](Self::cancelled) wait completes immediately.
///
/// # Example
///
/// ```
/// use slotcast_core::CancellationToken;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let watcher = token.clone();
///
/// token.cancel();
/// watcher.cancelled().await; // completes immediately
/// assert!(watcher.is_cancelled());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                cancelled: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Cancels the token, waking all waiters. Idempotent.
    pub fn cancel(&self) {
        // Release pairs with the Acquire in is_cancelled()
        self.shared.cancelled.store(true, Ordering::Release);
        self.shared.event.notify(usize::MAX);
    }

    /// Non-blocking check of the cancellation state.
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }

    /// Waits until the token is cancelled.
    ///
    /// Returns immediately if it already is.
    pub async fn cancelled(&self) {
        loop {
            if self.is_cancelled() {
                return;
            }
            let listener = self.shared.event.listen();
            // Re-check after registering so a cancel() racing with listen()
            // is not missed.
            if self.is_cancelled() {
                return;
            }
            listener.await;
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
