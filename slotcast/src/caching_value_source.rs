// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Broadcast source with a per-call freshness window.
//!
//! Where [`ValueSource`](crate::ValueSource) fixes its grace period at
//! construction, a [`CachingValueSource`] lets every `get` call decide how
//! stale a cached value it will accept, and optionally how long it is
//! willing to wait for a fresh one. This is the natural shape for
//! polling-style consumers ("give me a reading no older than a second,
//! within 50ms or fail").

use crate::timed::with_timeout;
use parking_lot::Mutex;
use slotcast_core::{Result, SharedFuture};
use std::mem;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Copy of the most recently set value and when it was set.
struct CachedValue<T> {
    value: T,
    cached_at: Instant,
}

struct CachingState<T> {
    current: SharedFuture<T>,
    last_value: Option<CachedValue<T>>,
}

/// A broadcast source whose consumers choose their staleness tolerance
/// per call.
///
/// Cheap to clone; all clones share the same slot and cache.
///
/// # Example
///
/// ```
/// use slotcast::CachingValueSource;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> slotcast::Result<()> {
/// let source = CachingValueSource::new();
/// source.set_next("reading");
///
/// // Served from the cache while younger than max_age.
/// assert_eq!(source.get(Duration::from_secs(1), None).await?, "reading");
/// # Ok(())
/// # }
/// ```
pub struct CachingValueSource<T: Clone> {
    state: Arc<Mutex<CachingState<T>>>,
}

impl<T: Clone> CachingValueSource<T> {
    /// Creates an empty source: nothing cached, first generation pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CachingState {
                current: SharedFuture::pending(),
                last_value: None,
            })),
        }
    }

    /// Sets the next value: resolves the pending generation for everyone
    /// awaiting it and refreshes the cached copy.
    ///
    /// Never fails; safe under concurrent setters and getters.
    pub fn set_next(&self, value: T) {
        let mut state = self.state.lock();
        let captured = mem::replace(&mut state.current, SharedFuture::pending());
        state.last_value = Some(CachedValue {
            value: value.clone(),
            cached_at: Instant::now(),
        });
        captured.resolve(value);
        trace!("cached value refreshed, generation rotated");
    }

    /// Gets a value no older than `max_age`.
    ///
    /// If the cached value is younger than `max_age` it is returned
    /// immediately, without suspension. Otherwise the call suspends until
    /// the next [`set_next`](Self::set_next). A `max_age` of zero never
    /// accepts the cache. There is no unbounded `max_age` sentinel - pass
    /// a very large duration to approximate one.
    ///
    /// # Errors
    ///
    /// With `timeout` set, returns [`SlotcastError::Timeout`] when it
    /// elapses first. A timed-out call leaves the cache and all other
    /// waiters untouched.
    ///
    /// [`SlotcastError::Timeout`]: slotcast_core::SlotcastError
    pub async fn get(&self, max_age: Duration, timeout: Option<Duration>) -> Result<T> {
        let pending = {
            let state = self.state.lock();
            if let Some(cached) = &state.last_value {
                if cached.cached_at.elapsed() < max_age {
                    return Ok(cached.value.clone());
                }
            }
            state.current.clone()
        };

        match timeout {
            Some(limit) => with_timeout(pending.resolved(), limit).await,
            None => Ok(pending.resolved().await),
        }
    }
}

impl<T: Clone> Default for CachingValueSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CachingValueSource<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
