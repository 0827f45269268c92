//! Checked decorator layers.
//!
//! Each decorator wraps any [`BinaryOperation`] and enforces exactly one
//! property on every `apply`. Layers nest, so a fully checked monoid
//! operation reads inside-out:
//!
//! ```rust
//! use magmars::operation::{Associative, BinaryOperation, Commutative, Operation, Unital};
//!
//! let mut addition =
//!     Unital::new(Commutative::new(Associative::new(Operation::new(|a: i32, b| a + b))), 0);
//! assert_eq!(addition.apply(2, 3).unwrap(), 5);
//! assert_eq!(addition.properties().len(), 3);
//! ```
//!
//! Probes run through [`eval`](BinaryOperation::eval) and never touch the
//! history, so the history stays an exact log of `apply` arguments.

use super::{BinaryOperation, History, Property};
use crate::error::{
    AssociativityError, CommutativityError, IdentityError, PropertyError,
};

// =============================================================================
// Commutative
// =============================================================================

/// Enforces `f(a, b) == f(b, a)` on every apply.
///
/// Each call additionally evaluates the swapped pair; a mismatch fails with
/// a [`CommutativityError`] carrying both inputs and both results.
///
/// # Examples
///
/// ```rust
/// use magmars::error::PropertyError;
/// use magmars::operation::{BinaryOperation, Commutative, Operation};
///
/// let mut subtraction = Commutative::new(Operation::new(|a: i32, b| a - b));
/// let violation = subtraction.apply(4, 2).unwrap_err();
/// match violation {
///     PropertyError::Commutativity(error) => {
///         assert_eq!((error.left, error.right), (4, 2));
///         assert_eq!((error.forward, error.reversed), (2, -2));
///     }
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Commutative<Op> {
    inner: Op,
}

impl<Op> Commutative<Op> {
    /// Layers a commutativity check over `inner`.
    pub const fn new(inner: Op) -> Self {
        Self { inner }
    }

    /// Consumes the layer and returns the wrapped operation.
    pub fn into_inner(self) -> Op {
        self.inner
    }
}

impl<E, Op> BinaryOperation<E> for Commutative<Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    fn eval(&self, left: E, right: E) -> E {
        self.inner.eval(left, right)
    }

    fn history(&self) -> &History<E> {
        self.inner.history()
    }

    fn history_mut(&mut self) -> &mut History<E> {
        self.inner.history_mut()
    }

    fn properties(&self) -> Vec<Property<E>> {
        let mut properties = self.inner.properties();
        properties.push(Property::Commutative);
        properties
    }

    fn check(&self, left: &E, right: &E) -> Result<(), PropertyError<E>> {
        self.inner.check(left, right)?;
        let forward = self.inner.eval(left.clone(), right.clone());
        let reversed = self.inner.eval(right.clone(), left.clone());
        if forward == reversed {
            Ok(())
        } else {
            Err(CommutativityError {
                left: left.clone(),
                right: right.clone(),
                forward,
                reversed,
            }
            .into())
        }
    }

    fn holds_named(&self, property: &str, samples: &[E]) -> bool {
        self.inner.holds_named(property, samples)
    }
}

// =============================================================================
// Associative
// =============================================================================

/// Enforces `f(f(a, b), c) == f(a, f(b, c))` on every apply.
///
/// The third element of the checked triple is sampled from recent history:
/// the left operand of the previous apply, falling back to the current left
/// operand when this is the first call.
///
/// # Examples
///
/// ```rust
/// use magmars::operation::{Associative, BinaryOperation, Operation};
///
/// let mut division = Associative::new(Operation::new(|a: f64, b| a / b));
/// // The first two calls' sampled triples happen to group equally for
/// // division; the third call's triple (3.0, 6.0, 4.0) does not.
/// assert!(division.apply(1.0, 2.0).is_ok());
/// assert!(division.apply(4.0, 2.0).is_ok());
/// assert!(division.apply(3.0, 6.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Associative<Op> {
    inner: Op,
}

impl<Op> Associative<Op> {
    /// Layers an associativity check over `inner`.
    pub const fn new(inner: Op) -> Self {
        Self { inner }
    }

    /// Consumes the layer and returns the wrapped operation.
    pub fn into_inner(self) -> Op {
        self.inner
    }
}

impl<E, Op> BinaryOperation<E> for Associative<Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    fn eval(&self, left: E, right: E) -> E {
        self.inner.eval(left, right)
    }

    fn history(&self) -> &History<E> {
        self.inner.history()
    }

    fn history_mut(&mut self) -> &mut History<E> {
        self.inner.history_mut()
    }

    fn properties(&self) -> Vec<Property<E>> {
        let mut properties = self.inner.properties();
        properties.push(Property::Associative);
        properties
    }

    fn check(&self, left: &E, right: &E) -> Result<(), PropertyError<E>> {
        self.inner.check(left, right)?;
        // The current pair is already recorded when apply runs this check,
        // so the previous call sits one entry before the latest.
        let history = self.inner.history();
        let third = history
            .len()
            .checked_sub(2)
            .and_then(|index| history.get(index))
            .map_or_else(|| left.clone(), |(prior_left, _)| prior_left.clone());
        let left_grouped = self
            .inner
            .eval(self.inner.eval(left.clone(), right.clone()), third.clone());
        let right_grouped = self
            .inner
            .eval(left.clone(), self.inner.eval(right.clone(), third.clone()));
        if left_grouped == right_grouped {
            Ok(())
        } else {
            Err(AssociativityError {
                first: left.clone(),
                second: right.clone(),
                third,
                left_grouped,
                right_grouped,
            }
            .into())
        }
    }

    fn holds_named(&self, property: &str, samples: &[E]) -> bool {
        self.inner.holds_named(property, samples)
    }
}

// =============================================================================
// Unital
// =============================================================================

/// Enforces a designated identity element on every apply.
///
/// Both operands of each call are verified against the candidate:
/// `f(x, id) == x` and `f(id, x) == x`. A failure yields an
/// [`IdentityError`] carrying the offending element and the candidate.
///
/// # Examples
///
/// ```rust
/// use magmars::operation::{BinaryOperation, Operation, Property, Unital};
///
/// let mut addition = Unital::new(Operation::new(|a: i32, b| a + b), 0);
/// assert_eq!(addition.apply(1, 2).unwrap(), 3);
/// assert!(addition.is(&Property::WithIdentity(0)));
///
/// let mut shifted = Unital::new(Operation::new(|a: i32, b| a + b), 3);
/// assert!(shifted.apply(2, 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Unital<E, Op> {
    inner: Op,
    identity: E,
}

impl<E, Op> Unital<E, Op> {
    /// Layers an identity check for `identity` over `inner`.
    pub const fn new(inner: Op, identity: E) -> Self {
        Self { inner, identity }
    }

    /// The candidate identity element.
    pub const fn identity(&self) -> &E {
        &self.identity
    }

    /// Consumes the layer and returns the wrapped operation.
    pub fn into_inner(self) -> Op {
        self.inner
    }
}

impl<E, Op> BinaryOperation<E> for Unital<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    fn eval(&self, left: E, right: E) -> E {
        self.inner.eval(left, right)
    }

    fn history(&self) -> &History<E> {
        self.inner.history()
    }

    fn history_mut(&mut self) -> &mut History<E> {
        self.inner.history_mut()
    }

    fn properties(&self) -> Vec<Property<E>> {
        let mut properties = self.inner.properties();
        properties.push(Property::WithIdentity(self.identity.clone()));
        properties
    }

    fn check(&self, left: &E, right: &E) -> Result<(), PropertyError<E>> {
        self.inner.check(left, right)?;
        for element in [left, right] {
            let absorbed_right =
                self.inner.eval(element.clone(), self.identity.clone());
            let absorbed_left =
                self.inner.eval(self.identity.clone(), element.clone());
            if absorbed_right != *element || absorbed_left != *element {
                return Err(IdentityError {
                    element: element.clone(),
                    identity: self.identity.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn holds_named(&self, property: &str, samples: &[E]) -> bool {
        self.inner.holds_named(property, samples)
    }
}

// =============================================================================
// Checked (custom properties)
// =============================================================================

/// Enforces a caller-defined property registered under a name.
///
/// The predicate receives the two inputs and the evaluated result of each
/// apply; returning `false` fails the call with
/// [`PropertyError::Other`] carrying the registered name. The same
/// predicate backs lazy validation through
/// [`holds_over`](BinaryOperation::holds_over) with
/// [`Property::Other`].
///
/// # Examples
///
/// ```rust
/// use magmars::operation::{BinaryOperation, Checked, Operation, Property};
///
/// // max is idempotent: f(a, a) == a
/// let mut max = Checked::new(
///     Operation::new(|a: i32, b| a.max(b)),
///     "idempotency",
///     |left: &i32, right: &i32, result: &i32| left != right || result == left,
/// );
/// assert_eq!(max.apply(3, 5).unwrap(), 5);
/// assert!(max.holds_over(&Property::Other("idempotency"), &[1, 2, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct Checked<Op, P> {
    inner: Op,
    property: &'static str,
    predicate: P,
}

impl<Op, P> Checked<Op, P> {
    /// Layers the named `predicate` check over `inner`.
    pub const fn new(inner: Op, property: &'static str, predicate: P) -> Self {
        Self { inner, property, predicate }
    }

    /// The name this property was registered under.
    pub const fn property(&self) -> &'static str {
        self.property
    }

    /// Consumes the layer and returns the wrapped operation.
    pub fn into_inner(self) -> Op {
        self.inner
    }
}

impl<E, Op, P> BinaryOperation<E> for Checked<Op, P>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
    P: Fn(&E, &E, &E) -> bool,
{
    fn eval(&self, left: E, right: E) -> E {
        self.inner.eval(left, right)
    }

    fn history(&self) -> &History<E> {
        self.inner.history()
    }

    fn history_mut(&mut self) -> &mut History<E> {
        self.inner.history_mut()
    }

    fn properties(&self) -> Vec<Property<E>> {
        let mut properties = self.inner.properties();
        properties.push(Property::Other(self.property));
        properties
    }

    fn check(&self, left: &E, right: &E) -> Result<(), PropertyError<E>> {
        self.inner.check(left, right)?;
        let result = self.inner.eval(left.clone(), right.clone());
        if (self.predicate)(left, right, &result) {
            Ok(())
        } else {
            Err(PropertyError::Other {
                property: self.property,
                left: left.clone(),
                right: right.clone(),
            })
        }
    }

    fn holds_named(&self, property: &str, samples: &[E]) -> bool {
        if property == self.property {
            samples.iter().all(|left| {
                samples.iter().all(|right| {
                    let result = self.inner.eval(left.clone(), right.clone());
                    (self.predicate)(left, right, &result)
                })
            })
        } else {
            self.inner.holds_named(property, samples)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
