//! Error types for property violations.
//!
//! Every checked wrapper reports failures through [`PropertyError`], a
//! unified taxonomy over the individual violation types. Violations are
//! per-invocation: an error from one `apply` never poisons the wrapper or
//! the structure holding it, and nothing is retried or suppressed
//! internally - the caller decides what a violation means.

use std::fmt;

use crate::operation::Property;

/// A commutativity violation detected for a specific input pair.
///
/// Carries both inputs and both evaluation orders so the caller can see
/// exactly which pair broke the law.
///
/// # Examples
///
/// ```rust
/// use magmars::error::CommutativityError;
///
/// let error = CommutativityError { left: 4, right: 2, forward: 2, reversed: -2 };
/// assert_eq!(
///     format!("{error}"),
///     "commutativity violated: f(4, 2) = 2 but f(2, 4) = -2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommutativityError<E> {
    /// The left input of the offending call.
    pub left: E,
    /// The right input of the offending call.
    pub right: E,
    /// The result of `f(left, right)`.
    pub forward: E,
    /// The result of `f(right, left)`.
    pub reversed: E,
}

impl<E: fmt::Debug> fmt::Display for CommutativityError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "commutativity violated: f({:?}, {:?}) = {:?} but f({:?}, {:?}) = {:?}",
            self.left, self.right, self.forward, self.right, self.left, self.reversed
        )
    }
}

impl<E: fmt::Debug> std::error::Error for CommutativityError<E> {}

/// An associativity violation detected for a specific triple.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociativityError<E> {
    /// The first element of the offending triple.
    pub first: E,
    /// The second element of the offending triple.
    pub second: E,
    /// The third element of the offending triple.
    pub third: E,
    /// The result of `f(f(first, second), third)`.
    pub left_grouped: E,
    /// The result of `f(first, f(second, third))`.
    pub right_grouped: E,
}

impl<E: fmt::Debug> fmt::Display for AssociativityError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "associativity violated: f(f({:?}, {:?}), {:?}) = {:?} but f({:?}, f({:?}, {:?})) = {:?}",
            self.first,
            self.second,
            self.third,
            self.left_grouped,
            self.first,
            self.second,
            self.third,
            self.right_grouped
        )
    }
}

impl<E: fmt::Debug> std::error::Error for AssociativityError<E> {}

/// An identity violation: the candidate identity failed to act as a unit
/// for the offending element.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityError<E> {
    /// The element for which the identity laws failed.
    pub element: E,
    /// The candidate identity that failed.
    pub identity: E,
}

impl<E: fmt::Debug> fmt::Display for IdentityError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "identity violated: {:?} is not a two-sided unit for {:?}",
            self.identity, self.element
        )
    }
}

impl<E: fmt::Debug> std::error::Error for IdentityError<E> {}

/// The unified error type for all property violations.
///
/// Returned by [`BinaryOperation::apply`](crate::operation::BinaryOperation::apply)
/// when any layer of the wrapper chain detects a violation for the current
/// inputs.
///
/// # Examples
///
/// ```rust
/// use magmars::error::{CommutativityError, PropertyError};
///
/// let error: PropertyError<i32> = CommutativityError {
///     left: 4,
///     right: 2,
///     forward: 2,
///     reversed: -2,
/// }
/// .into();
/// assert!(matches!(error, PropertyError::Commutativity(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyError<E> {
    /// A commutativity check failed.
    Commutativity(CommutativityError<E>),
    /// An associativity check failed.
    Associativity(AssociativityError<E>),
    /// An identity check failed.
    Identity(IdentityError<E>),
    /// A named custom property check failed.
    Other {
        /// The name the property was registered under.
        property: &'static str,
        /// The left input of the offending call.
        left: E,
        /// The right input of the offending call.
        right: E,
    },
}

impl<E: fmt::Debug> fmt::Display for PropertyError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Commutativity(error) => write!(formatter, "{error}"),
            Self::Associativity(error) => write!(formatter, "{error}"),
            Self::Identity(error) => write!(formatter, "{error}"),
            Self::Other { property, left, right } => write!(
                formatter,
                "property '{property}' violated for inputs ({left:?}, {right:?})"
            ),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for PropertyError<E> {}

impl<E> From<CommutativityError<E>> for PropertyError<E> {
    fn from(error: CommutativityError<E>) -> Self {
        Self::Commutativity(error)
    }
}

impl<E> From<AssociativityError<E>> for PropertyError<E> {
    fn from(error: AssociativityError<E>) -> Self {
        Self::Associativity(error)
    }
}

impl<E> From<IdentityError<E>> for PropertyError<E> {
    fn from(error: IdentityError<E>) -> Self {
        Self::Identity(error)
    }
}

/// An error raised while constructing an algebraic structure.
///
/// Structure constructors require the supplied operation chain to enforce
/// certain properties; a missing requirement is reported here rather than
/// panicking.
///
/// # Examples
///
/// ```rust
/// use magmars::error::StructureError;
/// use magmars::operation::Property;
///
/// let error = StructureError::MissingProperty(Property::<i32>::Associative);
/// assert_eq!(format!("{error}"), "operation does not enforce associativity");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StructureError<E> {
    /// The operation chain does not enforce a required property.
    MissingProperty(Property<E>),
}

impl<E: fmt::Debug> fmt::Display for StructureError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProperty(property) => {
                write!(formatter, "operation does not enforce {}", property.name())
            }
        }
    }
}

impl<E: fmt::Debug> std::error::Error for StructureError<E> {}
