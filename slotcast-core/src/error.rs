// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the slotcast source family.
//!
//! All fallible operations across the workspace surface a [`SlotcastError`].
//! Timeouts and cancellations are ordinary, expected outcomes of bounded
//! waits - callers are expected to branch on them rather than treat them as
//! failures.

use std::time::Duration;

/// Root error type for all slotcast operations.
#[derive(Debug, thiserror::Error)]
pub enum SlotcastError {
    /// A source was constructed with a structurally invalid configuration.
    ///
    /// Raised synchronously at construction time, e.g. for a zero grace
    /// period where a positive-or-unbounded one is required.
    #[error("Invalid configuration: {context}")]
    InvalidConfiguration {
        /// Description of the rejected configuration
        context: String,
    },

    /// A malformed argument was passed to a collaborator constructor.
    ///
    /// Raised by circular buffer construction on a zero capacity or
    /// oversized initial contents.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Description of the rejected argument
        context: String,
    },

    /// A bounded wait's timer elapsed before the operation resolved.
    ///
    /// Recoverable; the state of the source being awaited is untouched.
    #[error("Operation timed out after {duration:?}")]
    Timeout {
        /// How long we waited
        duration: Duration,
    },

    /// An external cancellation signal fired before resolution or timeout.
    ///
    /// Recoverable; other waiters on the same source are unaffected.
    #[error("Operation was cancelled before it completed")]
    Cancelled,
}

impl SlotcastError {
    /// Create an invalid configuration error with the given context
    pub fn invalid_configuration(context: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            context: context.into(),
        }
    }

    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create a timeout error
    #[must_use]
    pub const fn timeout(duration: Duration) -> Self {
        Self::Timeout { duration }
    }

    /// Check if this is a recoverable error
    ///
    /// Timeouts and cancellations are expected outcomes of bounded waits;
    /// configuration and argument errors indicate a caller bug.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Cancelled)
    }
}

/// Convenience alias used throughout the workspace
pub type Result<T> = std::result::Result<T, SlotcastError>;
