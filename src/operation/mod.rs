//! Property-enforcing wrappers around raw binary functions.
//!
//! A raw `Fn(E, E) -> E` knows nothing about the algebraic laws it is
//! supposed to satisfy. This module decorates such functions with dynamic
//! law checking: each wrapper layer enforces exactly one property, and
//! layers compose freely, so one operation can be simultaneously
//! associativity-, commutativity-, and identity-checked.
//!
//! Checks are **eager**: every [`apply`](BinaryOperation::apply) records the
//! argument pair into the [`History`] and then validates every layer's
//! property against the current inputs, failing with a typed
//! [`PropertyError`] on the first violation. The lazy counterpart is
//! [`holds_over`](BinaryOperation::holds_over), which re-validates a named
//! property against caller-supplied samples without touching the history.
//!
//! This is dynamic verification over sampled inputs, not a proof: a passing
//! check only says the law held for the inputs actually tested.
//!
//! # Examples
//!
//! ```rust
//! use magmars::operation::{BinaryOperation, Commutative, Operation};
//!
//! let mut addition = Commutative::new(Operation::new(|a: i32, b| a + b));
//! assert_eq!(addition.apply(2, 3).unwrap(), 5);
//!
//! let mut subtraction = Commutative::new(Operation::new(|a: i32, b| a - b));
//! assert!(subtraction.apply(4, 2).is_err());
//! ```

mod checked;
mod history;
mod property;

pub use checked::{Associative, Checked, Commutative, Unital};
pub use history::History;
pub use property::Property;

use crate::error::PropertyError;

/// The capability interface shared by raw operations and every checked
/// wrapper layer.
///
/// Implementors form decorator chains: a wrapper holds an inner
/// `BinaryOperation`, delegates [`eval`](Self::eval) and history access to
/// it, and contributes its own validation to [`check`](Self::check) and its
/// own marker to [`properties`](Self::properties). The base of every chain
/// is an [`Operation`], which owns the raw function and the history.
pub trait BinaryOperation<E: Clone + PartialEq> {
    /// Evaluates the underlying function without recording or checking.
    ///
    /// This is the probe used by property checks; it must be pure.
    fn eval(&self, left: E, right: E) -> E;

    /// Read-only view of the argument pairs recorded by past
    /// [`apply`](Self::apply) calls, in insertion order.
    fn history(&self) -> &History<E>;

    /// Mutable access to the history (used by [`apply`](Self::apply) and by
    /// callers that reset it to bound memory growth).
    fn history_mut(&mut self) -> &mut History<E>;

    /// The property markers enforced by this chain, innermost first.
    fn properties(&self) -> Vec<Property<E>>;

    /// Validates every layer's property against the given inputs.
    ///
    /// Inner layers run first, so the first violation along the chain wins.
    ///
    /// # Errors
    ///
    /// Returns the [`PropertyError`] of the first layer whose law fails for
    /// these inputs.
    fn check(&self, left: &E, right: &E) -> Result<(), PropertyError<E>>;

    /// Records the argument pair, runs every layer's check, and evaluates.
    ///
    /// The pair is recorded even when a check fails, so the history is a
    /// faithful call log: after `N` applies it holds exactly `N` pairs in
    /// call order.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] when any enforced property is violated
    /// for these inputs. The wrapper stays usable afterwards; violations
    /// are per-invocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::operation::{BinaryOperation, Operation};
    ///
    /// let mut concat = Operation::new(|a: String, b: String| a + &b);
    /// let greeting = concat.apply("Hello, ".to_string(), "World!".to_string());
    /// assert_eq!(greeting.unwrap(), "Hello, World!");
    /// assert_eq!(concat.history().len(), 1);
    /// ```
    fn apply(&mut self, left: E, right: E) -> Result<E, PropertyError<E>> {
        self.history_mut().record(left.clone(), right.clone());
        self.check(&left, &right)?;
        Ok(self.eval(left, right))
    }

    /// Whether this chain enforces the given property marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::operation::{BinaryOperation, Commutative, Operation, Property};
    ///
    /// let addition = Commutative::new(Operation::new(|a: i32, b| a + b));
    /// assert!(addition.is(&Property::Commutative));
    /// assert!(!addition.is(&Property::Associative));
    /// ```
    fn is(&self, property: &Property<E>) -> bool {
        self.properties().iter().any(|held| held == property)
    }

    /// Re-validates a property against the supplied samples.
    ///
    /// This is the lazy validation path: it probes through
    /// [`eval`](Self::eval) only and leaves the history untouched. For
    /// [`Property::Other`], validation is delegated down the chain to the
    /// layer registered under that name; an unknown name reports `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::operation::{BinaryOperation, Operation, Property};
    ///
    /// let subtraction = Operation::new(|a: i32, b| a - b);
    /// assert!(!subtraction.holds_over(&Property::Commutative, &[1, 2, 3]));
    /// assert!(!subtraction.holds_over(&Property::WithIdentity(0), &[5]));
    /// assert!(subtraction.history().is_empty());
    /// ```
    fn holds_over(&self, property: &Property<E>, samples: &[E]) -> bool {
        match property {
            Property::Associative => samples.iter().all(|first| {
                samples.iter().all(|second| {
                    samples.iter().all(|third| {
                        self.eval(self.eval(first.clone(), second.clone()), third.clone())
                            == self.eval(first.clone(), self.eval(second.clone(), third.clone()))
                    })
                })
            }),
            Property::Commutative => samples.iter().all(|first| {
                samples.iter().all(|second| {
                    self.eval(first.clone(), second.clone())
                        == self.eval(second.clone(), first.clone())
                })
            }),
            Property::WithIdentity(identity) => samples.iter().all(|element| {
                self.eval(element.clone(), identity.clone()) == *element
                    && self.eval(identity.clone(), element.clone()) == *element
            }),
            Property::Other(name) => self.holds_named(name, samples),
        }
    }

    /// Validates a named custom property against the samples.
    ///
    /// The default implementation knows no custom properties and reports
    /// `false`; [`Checked`] overrides it for the name it was registered
    /// under and delegates everything else inward.
    fn holds_named(&self, _property: &str, _samples: &[E]) -> bool {
        false
    }
}

/// The base of every wrapper chain: a raw binary function plus its history.
///
/// Enforces no properties on its own; layer [`Commutative`], [`Associative`],
/// [`Unital`], or [`Checked`] on top to add law checking.
///
/// # Examples
///
/// ```rust
/// use magmars::operation::{BinaryOperation, Operation};
///
/// let mut multiply = Operation::new(|a: i32, b| a * b);
/// assert_eq!(multiply.apply(6, 7).unwrap(), 42);
/// assert_eq!(multiply.history().latest(), Some(&(6, 7)));
/// ```
#[derive(Clone)]
pub struct Operation<E, F> {
    op: F,
    history: History<E>,
}

impl<E: core::fmt::Debug, F> core::fmt::Debug for Operation<E, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Operation")
            .field("op", &"<fn>")
            .field("history", &self.history)
            .finish()
    }
}

impl<E, F> Operation<E, F>
where
    F: Fn(E, E) -> E,
{
    /// Wraps a raw binary function with an unbounded history.
    pub fn new(op: F) -> Self {
        Self { op, history: History::unbounded() }
    }

    /// Wraps a raw binary function with a caller-configured history.
    ///
    /// Use a [`History::bounded`] here when the wrapper lives in a
    /// long-running process and unbounded growth is unacceptable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use magmars::operation::{BinaryOperation, History, Operation};
    ///
    /// let ring = History::bounded(NonZeroUsize::new(8).unwrap());
    /// let mut add = Operation::with_history(|a: i32, b| a + b, ring);
    /// for call in 0..100 {
    ///     add.apply(call, call).unwrap();
    /// }
    /// assert_eq!(add.history().len(), 8);
    /// ```
    pub fn with_history(op: F, history: History<E>) -> Self {
        Self { op, history }
    }
}

impl<E, F> BinaryOperation<E> for Operation<E, F>
where
    E: Clone + PartialEq,
    F: Fn(E, E) -> E,
{
    fn eval(&self, left: E, right: E) -> E {
        (self.op)(left, right)
    }

    fn history(&self) -> &History<E> {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History<E> {
        &mut self.history
    }

    fn properties(&self) -> Vec<Property<E>> {
        Vec::new()
    }

    fn check(&self, _left: &E, _right: &E) -> Result<(), PropertyError<E>> {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn raw_operation_applies_the_function() {
        let mut add = Operation::new(|a: i32, b| a + b);
        assert_eq!(add.apply(1, 2).unwrap(), 3);
        assert_eq!(add.apply(3, 4).unwrap(), 7);
    }

    #[rstest]
    fn raw_operation_enforces_nothing() {
        let mut sub = Operation::new(|a: i32, b| a - b);
        assert_eq!(sub.apply(2, 4).unwrap(), -2);
        assert!(sub.properties().is_empty());
    }

    #[rstest]
    fn apply_records_each_call_in_order() {
        let mut add = Operation::new(|a: i32, b| a + b);
        add.apply(1, 2).unwrap();
        add.apply(3, 4).unwrap();
        assert_eq!(add.history().len(), 2);
        assert_eq!(add.history().get(0), Some(&(1, 2)));
        assert_eq!(add.history().get(1), Some(&(3, 4)));
    }

    #[rstest]
    fn eval_does_not_record() {
        let add = Operation::new(|a: i32, b| a + b);
        assert_eq!(add.eval(1, 2), 3);
        assert!(add.history().is_empty());
    }

    #[rstest]
    fn holds_over_does_not_record() {
        let add = Operation::new(|a: i32, b| a + b);
        assert!(add.holds_over(&Property::Commutative, &[1, 2, 3]));
        assert!(add.holds_over(&Property::Associative, &[1, 2, 3]));
        assert!(add.holds_over(&Property::WithIdentity(0), &[1, 2, 3]));
        assert!(add.history().is_empty());
    }

    #[rstest]
    fn holds_over_rejects_broken_laws() {
        let sub = Operation::new(|a: i32, b| a - b);
        assert!(!sub.holds_over(&Property::Commutative, &[4, 2]));
        assert!(!sub.holds_over(&Property::Associative, &[1, 2, 3]));
        assert!(!sub.holds_over(&Property::WithIdentity(1), &[5]));
    }

    #[rstest]
    fn unknown_named_property_reports_false() {
        let add = Operation::new(|a: i32, b| a + b);
        assert!(!add.holds_over(&Property::Other("idempotency"), &[1, 2]));
    }

    #[rstest]
    fn history_reset_bounds_memory() {
        let mut add = Operation::new(|a: i32, b| a + b);
        add.apply(1, 1).unwrap();
        add.apply(2, 2).unwrap();
        add.history_mut().clear();
        assert!(add.history().is_empty());
        add.apply(3, 3).unwrap();
        assert_eq!(add.history().len(), 1);
    }
}
