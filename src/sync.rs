//! Thread-safe sharing for operation wrappers.
//!
//! Every `apply` performs a read-modify-append on the wrapper's history, so
//! a wrapper shared between threads needs one-writer-at-a-time discipline.
//! [`SharedOperation`] provides it: an [`Arc`]`<`[`Mutex`]`<_>>` handle that
//! serializes applies and hands out snapshots of the history. Carriers need
//! no such treatment - they are immutable and already shareable.
//!
//! `parking_lot`'s mutex is used deliberately: it does not poison, so a
//! panicking probe in one thread cannot wedge the wrapper for the others.
//!
//! # Examples
//!
//! ```rust
//! use std::thread;
//!
//! use magmars::operation::{Commutative, Operation};
//! use magmars::sync::SharedOperation;
//!
//! let shared = SharedOperation::new(Commutative::new(Operation::new(|a: i32, b| a + b)));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|offset| {
//!         let shared = shared.clone();
//!         thread::spawn(move || shared.apply(offset, 1).unwrap())
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(shared.history_snapshot().len(), 4);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::PropertyError;
use crate::operation::{BinaryOperation, Property};

/// A clonable, thread-safe handle to an operation wrapper chain.
///
/// All methods lock the wrapped chain for the duration of the call; clones
/// share the same chain and the same history.
pub struct SharedOperation<Op> {
    inner: Arc<Mutex<Op>>,
}

impl<Op> SharedOperation<Op> {
    /// Wraps an operation chain for shared use.
    pub fn new(operation: Op) -> Self {
        Self { inner: Arc::new(Mutex::new(operation)) }
    }
}

impl<Op> SharedOperation<Op> {
    /// Applies the operation under the lock.
    ///
    /// # Errors
    ///
    /// Propagates any [`PropertyError`] from the chain, exactly as the
    /// unshared [`apply`](BinaryOperation::apply) would.
    pub fn apply<E>(&self, left: E, right: E) -> Result<E, PropertyError<E>>
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().apply(left, right)
    }

    /// The property markers the chain enforces.
    pub fn properties<E>(&self) -> Vec<Property<E>>
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().properties()
    }

    /// Whether the chain enforces the given property.
    pub fn is<E>(&self, property: &Property<E>) -> bool
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().is(property)
    }

    /// Lazily re-validates a property over the supplied samples.
    pub fn holds_over<E>(&self, property: &Property<E>, samples: &[E]) -> bool
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().holds_over(property, samples)
    }

    /// A point-in-time copy of the history, oldest first.
    pub fn history_snapshot<E>(&self) -> Vec<(E, E)>
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().history().iter().cloned().collect()
    }

    /// The number of recorded applies.
    pub fn history_len<E>(&self) -> usize
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().history().len()
    }

    /// Discards the recorded history, bounding memory for long-lived
    /// wrappers.
    pub fn reset_history<E>(&self)
    where
        E: Clone + PartialEq,
        Op: BinaryOperation<E>,
    {
        self.inner.lock().history_mut().clear();
    }
}

impl<Op> Clone for SharedOperation<Op> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}
