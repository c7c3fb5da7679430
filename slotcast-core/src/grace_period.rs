// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Staleness tolerance configuration for broadcast sources.

use crate::error::{Result, SlotcastError};
use std::time::Duration;

/// How long a source may keep serving its most recently published value to
/// new waiters instead of making them wait for the next one.
///
/// Fixed at construction time for `ValueSource`/`EventSource`; the caching
/// variants take the equivalent `max_age` per call instead.
///
/// # Example
///
/// ```
/// use slotcast_core::GracePeriod;
/// use std::time::Duration;
///
/// assert!(GracePeriod::Within(Duration::from_millis(100)).validate().is_ok());
/// assert!(GracePeriod::Within(Duration::ZERO).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GracePeriod {
    /// Waiters always block until the next publish; a value published
    /// before the wait began is never served.
    #[default]
    None,
    /// The last published value is served while it is younger than the
    /// window; older values fall through to waiting for the next publish.
    /// The window must be positive.
    Within(Duration),
    /// The last published value is always served when one exists,
    /// regardless of age. Waiters only block before the first publish.
    Unbounded,
}

impl GracePeriod {
    /// Rejects structurally invalid configurations.
    ///
    /// # Errors
    ///
    /// Returns [`SlotcastError::InvalidConfiguration`] for
    /// `Within(Duration::ZERO)` - a zero window can never serve anything
    /// and is always a caller mistake; `GracePeriod::None` states that
    /// intent explicitly.
    pub fn validate(self) -> Result<()> {
        match self {
            Self::Within(window) if window.is_zero() => Err(SlotcastError::invalid_configuration(
                "grace period must be a positive duration, GracePeriod::None or GracePeriod::Unbounded",
            )),
            _ => Ok(()),
        }
    }

    /// Whether a previously published value of the given age may still be
    /// served under this configuration.
    #[must_use]
    pub fn admits(self, age: Duration) -> bool {
        match self {
            Self::None => false,
            Self::Within(window) => age < window,
            Self::Unbounded => true,
        }
    }
}
