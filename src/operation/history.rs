//! Input history for operation wrappers.
//!
//! Every wrapper chain records the argument pair of each `apply` call into a
//! [`History`]. The record is append-only and insertion-ordered; it exists
//! for diagnostics and testing, not for correctness. An unbounded history
//! grows for the lifetime of the wrapper, so long-running callers can either
//! construct a bounded ring variant or [`clear`](History::clear) it
//! periodically.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// An ordered record of the argument pairs passed through an operation.
///
/// Unbounded by default. A bounded history keeps only the most recent
/// `capacity` pairs, silently dropping the oldest entry once full.
///
/// # Examples
///
/// ```rust
/// use magmars::operation::History;
///
/// let mut history = History::unbounded();
/// history.record(1, 2);
/// history.record(3, 4);
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get(0), Some(&(1, 2)));
/// assert_eq!(history.latest(), Some(&(3, 4)));
/// ```
#[derive(Debug, Clone)]
pub struct History<E> {
    entries: VecDeque<(E, E)>,
    capacity: Option<NonZeroUsize>,
}

impl<E> History<E> {
    /// Returns an empty history without a size limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { entries: VecDeque::new(), capacity: None }
    }

    /// Returns an empty history that keeps at most `capacity` pairs.
    ///
    /// Once full, recording a new pair drops the oldest one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use magmars::operation::History;
    ///
    /// let mut history = History::bounded(NonZeroUsize::new(2).unwrap());
    /// history.record(1, 1);
    /// history.record(2, 2);
    /// history.record(3, 3);
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.get(0), Some(&(2, 2)));
    /// ```
    #[must_use]
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            capacity: Some(capacity),
        }
    }

    /// The configured size limit, if any.
    #[must_use]
    pub const fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Appends an argument pair.
    ///
    /// For a bounded history at capacity, the oldest pair is dropped first.
    pub fn record(&mut self, left: E, right: E) {
        if let Some(capacity) = self.capacity
            && self.entries.len() == capacity.get()
        {
            self.entries.pop_front();
        }
        self.entries.push_back((left, right));
    }

    /// The number of recorded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The pair recorded `index` calls ago from the start, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&(E, E)> {
        self.entries.get(index)
    }

    /// The most recently recorded pair.
    #[must_use]
    pub fn latest(&self) -> Option<&(E, E)> {
        self.entries.back()
    }

    /// Iterates over recorded pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(E, E)> {
        self.entries.iter()
    }

    /// Discards all recorded pairs, keeping the capacity configuration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<E> Default for History<E> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<'history, E> IntoIterator for &'history History<E> {
    type Item = &'history (E, E);
    type IntoIter = std::collections::vec_deque::Iter<'history, (E, E)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
