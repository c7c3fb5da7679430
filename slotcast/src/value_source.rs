// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Broadcast source for successive values of `T`.
//!
//! A [`ValueSource`] publishes values to all awaiting consumers. A waiter
//! normally observes "the next value published after the wait began"; with
//! a [`GracePeriod`] configured, a young-enough previous value is served
//! instead, without suspension.
//!
//! All waiters on one generation observe the same value - each receives a
//! clone, so publish an `Arc<T>` when reference identity matters.
//!
//! ## Example
//!
//! ```
//! use slotcast::ValueSource;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = ValueSource::new();
//!
//! // Waits registered before a publish all see it.
//! let first = source.wait();
//! let second = source.wait();
//!
//! source.publish(5);
//! assert_eq!(first.resolved().await, 5);
//! assert_eq!(second.resolved().await, 5);
//! # }
//! ```

use parking_lot::Mutex;
use slotcast_core::{GracePeriod, Result, SharedFuture};
use std::mem;
use std::sync::Arc;
use tokio::time::Instant;

/// The most recent publish: the generation it resolved, and when.
struct Snapshot<T> {
    future: SharedFuture<T>,
    published_at: Instant,
}

struct SourceState<T> {
    /// The live generation the next publish will resolve.
    current: SharedFuture<T>,
    last_published: Option<Snapshot<T>>,
}

struct SourceShared<T> {
    grace: GracePeriod,
    state: Mutex<SourceState<T>>,
}

/// A broadcast source of successive `T` values.
///
/// Cheap to clone; all clones publish into and wait on the same slot.
/// See the [module documentation](self) for semantics.
pub struct ValueSource<T: Clone> {
    shared: Arc<SourceShared<T>>,
}

impl<T: Clone> std::fmt::Debug for ValueSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueSource").finish_non_exhaustive()
    }
}

impl<T: Clone> ValueSource<T> {
    /// Creates a source with no grace period: waiters always block until
    /// the next publish.
    #[must_use]
    pub fn new() -> Self {
        Self::build(GracePeriod::None)
    }

    /// Creates a source with the given staleness tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SlotcastError::InvalidConfiguration`] for a zero grace
    /// window; see [`GracePeriod::validate`].
    ///
    /// [`SlotcastError::InvalidConfiguration`]: slotcast_core::SlotcastError
    pub fn with_grace(grace: GracePeriod) -> Result<Self> {
        grace.validate()?;
        Ok(Self::build(grace))
    }

    fn build(grace: GracePeriod) -> Self {
        Self {
            shared: Arc::new(SourceShared {
                grace,
                state: Mutex::new(SourceState {
                    current: SharedFuture::pending(),
                    last_published: None,
                }),
            }),
        }
    }

    /// The staleness tolerance this source was built with.
    #[must_use]
    pub fn grace(&self) -> GracePeriod {
        self.shared.grace
    }

    /// Publishes a value, resolving the pending generation for everyone
    /// awaiting it and opening a fresh one for subsequent waiters.
    ///
    /// Never fails and never blocks other than briefly taking the state
    /// mutex; safe to call from any number of producers concurrently.
    pub fn publish(&self, value: T) {
        let mut state = self.shared.state.lock();
        let captured = mem::replace(&mut state.current, SharedFuture::pending());
        state.last_published = Some(Snapshot {
            future: captured.clone(),
            published_at: Instant::now(),
        });
        // Resolving inside the lock keeps capture-replace-resolve atomic for
        // concurrent waiters; notify wakes tasks without running them inline.
        captured.resolve(value);
        trace!("value published, generation rotated");
    }

    /// Returns the generation this waiter should await.
    ///
    /// With no grace period this is always the pending generation. With
    /// one, the last published value is returned instead while the grace
    /// window admits its age - such a handle is already resolved and
    /// awaiting it completes immediately.
    ///
    /// The call itself never suspends and never fails; bound the returned
    /// handle with [`timed::with_timeout`](crate::timed::with_timeout) for
    /// a bounded wait.
    #[must_use]
    pub fn wait(&self) -> SharedFuture<T> {
        let state = self.shared.state.lock();
        match &state.last_published {
            Some(snapshot) if self.shared.grace.admits(snapshot.published_at.elapsed()) => {
                snapshot.future.clone()
            }
            _ => state.current.clone(),
        }
    }
}

impl<T: Clone> Default for ValueSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ValueSource<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}
