//! Algebraic structures: a carrier set paired with a checked operation.
//!
//! A structure composes a [`Carrier`] with one property-validated operation
//! chain and exposes which property markers hold over it. The magma family
//! is graded by what the chain must enforce:
//!
//! | Structure | Required properties |
//! |---|---|
//! | [`Magma`] | none |
//! | [`Groupoid`] | associativity |
//! | [`UnitalMagma`] | identity |
//! | [`Monoid`] | associativity and identity |
//!
//! Constructors with requirements return a [`StructureError`] when the
//! supplied chain does not enforce them. After construction a structure is
//! immutable except through its operation's own `apply`; a property
//! violation surfaces at that call site and never poisons the structure.
//!
//! # Examples
//!
//! ```rust
//! use magmars::prelude::*;
//!
//! let addition = Unital::new(
//!     Commutative::new(Associative::new(Operation::new(|a: i32, b| a + b))),
//!     0,
//! );
//! let mut monoid = Monoid::new(Carrier::universal(), addition, 0).unwrap();
//!
//! assert_eq!(monoid.apply(2, 3).unwrap(), 5);
//! assert!(monoid.is(&Property::Commutative));
//! assert!(monoid.is(&Property::WithIdentity(0)));
//! ```

use crate::carrier::Carrier;
use crate::error::{PropertyError, StructureError};
use crate::operation::{BinaryOperation, History, Property};

/// Common behavior of every carrier-plus-operation composite.
///
/// All query and apply methods delegate to the contained carrier and
/// operation chain; the structure itself holds no other state.
pub trait AlgebraicStructure<E: Clone + PartialEq> {
    /// The operation chain this structure is built over.
    type Op: BinaryOperation<E>;

    /// The carrier set.
    fn carrier(&self) -> &Carrier<E>;

    /// The operation chain.
    fn operation(&self) -> &Self::Op;

    /// Mutable access to the operation chain.
    fn operation_mut(&mut self) -> &mut Self::Op;

    /// Whether `element` is a member of the carrier.
    fn contains(&self, element: &E) -> bool {
        self.carrier().contains(element)
    }

    /// Applies the operation, recording into its history and running its
    /// eager property checks.
    ///
    /// # Errors
    ///
    /// Propagates any [`PropertyError`] from the operation chain. The
    /// structure remains usable afterwards.
    fn apply(&mut self, left: E, right: E) -> Result<E, PropertyError<E>> {
        self.operation_mut().apply(left, right)
    }

    /// The property markers the operation chain enforces.
    fn properties(&self) -> Vec<Property<E>> {
        self.operation().properties()
    }

    /// Whether the operation chain enforces the given property.
    fn is(&self, property: &Property<E>) -> bool {
        self.operation().is(property)
    }

    /// The operation's input history.
    fn history(&self) -> &History<E> {
        self.operation().history()
    }

    /// Lazily re-validates a property over the supplied samples.
    fn holds_over(&self, property: &Property<E>, samples: &[E]) -> bool {
        self.operation().holds_over(property, samples)
    }

    /// Whether the operation maps every sampled pair back into the carrier.
    ///
    /// Closure in the mathematical sense, checked over samples only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::prelude::*;
    ///
    /// let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    /// let addition = Magma::new(evens.clone(), Operation::new(|a: i32, b| a + b));
    /// assert!(addition.is_closed_over(&[0, 2, 4]));
    ///
    /// let odds = Carrier::predicate(|x: &i32| x % 2 != 0);
    /// let odd_addition = Magma::new(odds, Operation::new(|a: i32, b| a + b));
    /// assert!(!odd_addition.is_closed_over(&[1, 3]));
    /// ```
    fn is_closed_over(&self, samples: &[E]) -> bool {
        samples.iter().all(|left| {
            samples.iter().all(|right| {
                self.contains(&self.operation().eval(left.clone(), right.clone()))
            })
        })
    }
}

// =============================================================================
// Magma
// =============================================================================

/// A carrier with a binary operation and no required properties.
///
/// The simplest algebraic structure: construction cannot fail because
/// nothing is demanded of the operation.
///
/// # Examples
///
/// ```rust
/// use magmars::prelude::*;
///
/// let mut magma = Magma::new(Carrier::universal(), Operation::new(|a: i32, b| a + b));
/// assert_eq!(magma.apply(1, 2).unwrap(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Magma<E, Op> {
    carrier: Carrier<E>,
    operation: Op,
}

impl<E, Op> Magma<E, Op> {
    /// Pairs a carrier with an operation.
    pub const fn new(carrier: Carrier<E>, operation: Op) -> Self {
        Self { carrier, operation }
    }

    /// Splits the structure back into its carrier and operation.
    pub fn into_parts(self) -> (Carrier<E>, Op) {
        (self.carrier, self.operation)
    }
}

impl<E, Op> AlgebraicStructure<E> for Magma<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    type Op = Op;

    fn carrier(&self) -> &Carrier<E> {
        &self.carrier
    }

    fn operation(&self) -> &Op {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Op {
        &mut self.operation
    }
}

// =============================================================================
// Groupoid
// =============================================================================

/// A carrier with an associativity-enforced operation.
///
/// # Examples
///
/// ```rust
/// use magmars::prelude::*;
///
/// let addition = Associative::new(Operation::new(|a: i32, b| a + b));
/// let mut groupoid = Groupoid::new(Carrier::universal(), addition).unwrap();
/// assert_eq!(groupoid.apply(1, 2).unwrap(), 3);
///
/// let unchecked = Operation::new(|a: i32, b| a + b);
/// assert!(Groupoid::new(Carrier::universal(), unchecked).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Groupoid<E, Op> {
    carrier: Carrier<E>,
    operation: Op,
}

impl<E, Op> Groupoid<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    /// Pairs a carrier with an associative operation chain.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::MissingProperty`] when the chain does not
    /// enforce [`Property::Associative`].
    pub fn new(carrier: Carrier<E>, operation: Op) -> Result<Self, StructureError<E>> {
        if operation.is(&Property::Associative) {
            Ok(Self { carrier, operation })
        } else {
            Err(StructureError::MissingProperty(Property::Associative))
        }
    }
}

impl<E, Op> AlgebraicStructure<E> for Groupoid<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    type Op = Op;

    fn carrier(&self) -> &Carrier<E> {
        &self.carrier
    }

    fn operation(&self) -> &Op {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Op {
        &mut self.operation
    }
}

impl<E, Op> From<Groupoid<E, Op>> for Magma<E, Op> {
    fn from(groupoid: Groupoid<E, Op>) -> Self {
        Self::new(groupoid.carrier, groupoid.operation)
    }
}

// =============================================================================
// UnitalMagma
// =============================================================================

/// A carrier with an operation enforcing a designated identity element.
///
/// # Examples
///
/// ```rust
/// use magmars::prelude::*;
///
/// let addition = Unital::new(Operation::new(|a: i32, b| a + b), 0);
/// let mut unital = UnitalMagma::new(Carrier::universal(), addition, 0).unwrap();
/// assert_eq!(unital.apply(1, 2).unwrap(), 3);
/// assert_eq!(*unital.identity(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct UnitalMagma<E, Op> {
    carrier: Carrier<E>,
    operation: Op,
    identity: E,
}

impl<E, Op> UnitalMagma<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    /// Pairs a carrier with an identity-enforcing operation chain.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::MissingProperty`] when the chain does not
    /// enforce [`Property::WithIdentity`] for exactly this `identity`.
    pub fn new(
        carrier: Carrier<E>,
        operation: Op,
        identity: E,
    ) -> Result<Self, StructureError<E>> {
        if operation.is(&Property::WithIdentity(identity.clone())) {
            Ok(Self { carrier, operation, identity })
        } else {
            Err(StructureError::MissingProperty(Property::WithIdentity(identity)))
        }
    }

    /// The enforced identity element.
    pub const fn identity(&self) -> &E {
        &self.identity
    }
}

impl<E, Op> AlgebraicStructure<E> for UnitalMagma<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    type Op = Op;

    fn carrier(&self) -> &Carrier<E> {
        &self.carrier
    }

    fn operation(&self) -> &Op {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Op {
        &mut self.operation
    }
}

impl<E, Op> From<UnitalMagma<E, Op>> for Magma<E, Op> {
    fn from(unital: UnitalMagma<E, Op>) -> Self {
        Self::new(unital.carrier, unital.operation)
    }
}

// =============================================================================
// Monoid
// =============================================================================

/// A carrier with an associative, identity-enforcing operation.
///
/// # Examples
///
/// ```rust
/// use magmars::prelude::*;
///
/// let addition = Unital::new(Associative::new(Operation::new(|a: i32, b| a + b)), 0);
/// let mut monoid = Monoid::new(Carrier::universal(), addition, 0).unwrap();
/// assert_eq!(monoid.apply(2, 3).unwrap(), 5);
/// assert!(monoid.is(&Property::Associative));
/// assert!(monoid.is(&Property::WithIdentity(0)));
/// ```
#[derive(Debug, Clone)]
pub struct Monoid<E, Op> {
    carrier: Carrier<E>,
    operation: Op,
    identity: E,
}

impl<E, Op> Monoid<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    /// Pairs a carrier with an associative, identity-enforcing chain.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::MissingProperty`] naming the first missing
    /// requirement.
    pub fn new(
        carrier: Carrier<E>,
        operation: Op,
        identity: E,
    ) -> Result<Self, StructureError<E>> {
        if !operation.is(&Property::Associative) {
            return Err(StructureError::MissingProperty(Property::Associative));
        }
        if !operation.is(&Property::WithIdentity(identity.clone())) {
            return Err(StructureError::MissingProperty(Property::WithIdentity(identity)));
        }
        Ok(Self { carrier, operation, identity })
    }

    /// The enforced identity element.
    pub const fn identity(&self) -> &E {
        &self.identity
    }
}

impl<E, Op> AlgebraicStructure<E> for Monoid<E, Op>
where
    E: Clone + PartialEq,
    Op: BinaryOperation<E>,
{
    type Op = Op;

    fn carrier(&self) -> &Carrier<E> {
        &self.carrier
    }

    fn operation(&self) -> &Op {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Op {
        &mut self.operation
    }
}

impl<E, Op> From<Monoid<E, Op>> for Magma<E, Op> {
    fn from(monoid: Monoid<E, Op>) -> Self {
        Self::new(monoid.carrier, monoid.operation)
    }
}

impl<E, Op> From<Monoid<E, Op>> for Groupoid<E, Op> {
    /// Downgrades without re-validation; the chain still enforces
    /// associativity.
    fn from(monoid: Monoid<E, Op>) -> Self {
        Self { carrier: monoid.carrier, operation: monoid.operation }
    }
}

impl<E, Op> From<Monoid<E, Op>> for UnitalMagma<E, Op> {
    /// Downgrades without re-validation; the chain still enforces the
    /// identity.
    fn from(monoid: Monoid<E, Op>) -> Self {
        Self {
            carrier: monoid.carrier,
            operation: monoid.operation,
            identity: monoid.identity,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
