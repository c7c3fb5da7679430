// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-capacity double-ended buffer with opposite-end eviction.
//!
//! Pushing into a full buffer evicts from the other end:
//! [`push_back`](CircularBuffer::push_back) drops the front element,
//! [`push_front`](CircularBuffer::push_front) drops the back one. Used by
//! rate-limiter style consumers that only care about the most recent N
//! entries.

use slotcast_core::{Result, SlotcastError};
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::ops::Index;

/// A deque that never grows past its construction-time capacity.
///
/// Indexing and iteration are in logical order: index 0 is the front,
/// `len() - 1` the back, regardless of how elements wrapped internally.
///
/// # Example
///
/// ```
/// use slotcast::CircularBuffer;
///
/// let mut buffer = CircularBuffer::new(3).unwrap();
/// for i in 0..5 {
///     buffer.push_back(i);
/// }
/// // Only the last three survive, in insertion order.
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer of the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SlotcastError::InvalidArgument`] for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SlotcastError::invalid_argument(
                "circular buffer capacity must be positive",
            ));
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Creates a buffer pre-filled with `items`, front to back.
    ///
    /// # Errors
    ///
    /// Returns [`SlotcastError::InvalidArgument`] for a zero capacity or
    /// when `items` holds more elements than fit.
    pub fn from_items(capacity: usize, items: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut buffer = Self::new(capacity)?;
        for item in items {
            if buffer.is_full() {
                return Err(SlotcastError::invalid_argument(
                    "too many items for the circular buffer capacity",
                ));
            }
            buffer.items.push_back(item);
        }
        Ok(buffer)
    }

    /// Maximum number of elements the buffer holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` once the buffer is at capacity; further pushes evict.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// The element at the front, `self[0]`.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The element at the back, `self[len - 1]`.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Appends to the back, evicting the front element when full.
    pub fn push_back(&mut self, item: T) {
        if self.is_full() {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Prepends to the front, evicting the back element when full.
    pub fn push_front(&mut self, item: T) {
        if self.is_full() {
            self.items.pop_back();
        }
        self.items.push_front(item);
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// The element at logical position `index`, or `None` out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates front to back in logical order.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics when `index >= len()`; use [`get`](Self::get) for a checked
    /// access.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
