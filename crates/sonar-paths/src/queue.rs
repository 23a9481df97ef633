//! An ordered container with a caller-supplied priority relation.
//!
//! Items are kept in a `Vec` sorted from lowest to highest priority, so the
//! next item to leave is always at the back. Insertion is a linear scan,
//! which keeps ties in arrival order: among items neither of which has
//! priority over the other, the one added first is removed first.

use std::fmt;

/// A priority queue ordered by `has_priority_over(a, b)`.
///
/// The relation should be a strict order: when it returns `true`, `a`
/// leaves the queue before `b`. There is no decrease-key; to change an
/// item's priority, remove it and add it again.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    has_priority_over: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `has_priority_over`.
    pub fn new(has_priority_over: F) -> Self {
        Self {
            items: Vec::new(),
            has_priority_over,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize, has_priority_over: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            has_priority_over,
        }
    }

    /// Insert `item` in front of the first stored item it does not have
    /// priority over.
    pub fn add(&mut self, item: T) {
        let pos = self
            .items
            .iter()
            .position(|other| !(self.has_priority_over)(&item, other))
            .unwrap_or(self.items.len());
        self.items.insert(pos, item);
    }

    /// Remove and return the highest-priority item.
    pub fn remove(&mut self) -> Result<T, QueueError> {
        self.items.pop().ok_or(QueueError::Empty)
    }

    /// The item [`remove`](Self::remove) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from lowest to highest priority.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Errors reported by [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// [`PriorityQueue::remove`] was called on an empty queue.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("remove from an empty priority queue"),
        }
    }
}

impl std::error::Error for QueueError {}
