// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-assignment future cell with broadcast resolution.
//!
//! A [`SharedFuture`] starts pending and transitions exactly once to a
//! resolved state carrying a value. Any number of observers may hold clones
//! of the handle; all of them see the same resolution, each receiving a
//! clone of the value. Callers that need reference sharing resolve with an
//! `Arc<T>`.
//!
//! ## Characteristics
//!
//! - **Single assignment**: a second [`resolve`](SharedFuture::resolve) is
//!   a programming error and panics - resolutions are never silently
//!   overwritten.
//! - **Broadcast**: resolution wakes every registered waiter at once.
//! - **Suspension without polling**: waiters register with an
//!   `event-listener` and sleep until notified.
//! - **Thread-safe**: cheap to clone; all clones share the same cell.
//!
//! ## Example
//!
//! ```
//! use slotcast_core::SharedFuture;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let future = SharedFuture::pending();
//! let observer = future.clone();
//!
//! assert_eq!(observer.try_get(), None);
//!
//! future.resolve(7);
//! assert_eq!(observer.resolved().await, 7);
//! # }
//! ```

use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

struct Cell<T> {
    resolved: AtomicBool,
    slot: Mutex<Option<T>>,
    event: Event,
}

/// A handle to a value that becomes available asynchronously, exactly once.
///
/// Cloning the handle is cheap and shares the underlying cell. See the
/// [module documentation](self) for the full contract.
pub struct SharedFuture<T> {
    cell: Arc<Cell<T>>,
}

impl<T> SharedFuture<T> {
    /// Creates a new, still-pending future.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            cell: Arc::new(Cell {
                resolved: AtomicBool::new(false),
                slot: Mutex::new(None),
                event: Event::new(),
            }),
        }
    }

    /// Returns `true` once the future has been resolved.
    pub fn is_resolved(&self) -> bool {
        // Acquire pairs with the Release store in resolve()
        self.cell.resolved.load(Ordering::Acquire)
    }

    /// Resolves the future, waking all current and future waiters.
    ///
    /// # Panics
    ///
    /// Panics if the future has already been resolved. A generation is
    /// resolved exactly once by the source that owns it; a second
    /// resolution means that invariant was violated and must not be
    /// papered over.
    pub fn resolve(&self, value: T) {
        {
            let mut slot = self.cell.slot.lock();
            assert!(
                slot.is_none(),
                "SharedFuture resolved twice; each generation is resolved exactly once"
            );
            *slot = Some(value);
        }
        // Publish the flag before waking so woken tasks always observe the value
        self.cell.resolved.store(true, Ordering::Release);
        self.cell.event.notify(usize::MAX);
    }
}

impl<T: Clone> SharedFuture<T> {
    /// Returns the resolved value without suspending, or `None` while pending.
    pub fn try_get(&self) -> Option<T> {
        if !self.is_resolved() {
            return None;
        }
        self.cell.slot.lock().clone()
    }

    /// Waits for the future to resolve.
    ///
    /// Resolves immediately if the value is already set. Dropping the
    /// returned [`Resolved`] detaches only this waiter; the cell and every
    /// other observer are unaffected.
    pub fn resolved(&self) -> Resolved<'_, T> {
        Resolved {
            future: self,
            listener: None,
        }
    }
}

impl<T> Clone for SharedFuture<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for SharedFuture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedFuture")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Future returned by [`SharedFuture::resolved()`].
pub struct Resolved<'a, T> {
    future: &'a SharedFuture<T>,
    listener: Option<EventListener>,
}

impl<T: Clone> Future for Resolved<'_, T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        loop {
            if let Some(value) = self.future.try_get() {
                return Poll::Ready(value);
            }

            if self.listener.is_none() {
                // Register, then loop to re-check: a resolution between the
                // check above and listen() must not be missed.
                self.listener = Some(self.future.cell.event.listen());
                continue;
            }

            match Pin::new(self.listener.as_mut().unwrap()).poll(cx) {
                Poll::Ready(()) => self.listener = None,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
