// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer for diagnostic events.

use std::collections::VecDeque;

/// Events kept when no capacity is given.
const DEFAULT_CAPACITY: usize = 256;
/// Accepted capacity range; values outside are clamped.
const CAPACITY_RANGE: (usize, usize) = (16, 4096);

/// Validated number of events a session log keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(CAPACITY_RANGE.0, CAPACITY_RANGE.1))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_CAPACITY)
    }
}

/// Fixed-capacity FIFO that drops its oldest element when full.
///
/// Iteration is chronological (oldest first).
///
/// # Example
///
/// ```
/// use apod_gallery::diagnostics::CircularBuffer;
///
/// let mut buffer = CircularBuffer::with_raw_capacity(2);
/// buffer.push("fetch");
/// buffer.push("open");
/// buffer.push("close");
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec!["open", "close"]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer holding at most `capacity` elements (at least one).
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `item`, evicting the oldest element at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Most recent element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_below_capacity() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(buffer.last(), Some(&3));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn overflow_evicts_oldest_and_keeps_len() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for value in 1..=5 {
            buffer.push(value);
        }

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 3);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push('a');
        buffer.push('b');

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.last(), Some(&'b'));
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut buffer = CircularBuffer::with_raw_capacity(2);
        buffer.push(String::from("x"));
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn capacity_is_clamped_to_range() {
        assert_eq!(BufferCapacity::new(0).value(), 16);
        assert_eq!(BufferCapacity::new(1_000_000).value(), 4096);
        assert_eq!(BufferCapacity::default().value(), 256);
    }

    #[test]
    fn new_uses_validated_capacity() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::new(500));
        assert_eq!(buffer.capacity(), 500);
    }
}
