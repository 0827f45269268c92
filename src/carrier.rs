//! Carrier sets - the "set" half of an algebraic structure.
//!
//! A [`Carrier`] classifies values of an element type `E` as members or
//! non-members. It owns no elements; membership is decided either trivially
//! (every value of `E` belongs) or by a predicate closure. This mirrors the
//! set-builder construction of ZF set theory: a subset of the supertype `E`
//! is whatever its membership condition says it is.
//!
//! Carriers are immutable. The combinators ([`union`](Carrier::union),
//! [`intersection`](Carrier::intersection), [`inserting`](Carrier::inserting),
//! [`without`](Carrier::without)) return new carriers and leave their inputs
//! untouched, so a carrier can be shared freely once built.
//!
//! # Examples
//!
//! ```rust
//! use magmars::carrier::Carrier;
//!
//! let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
//! assert!(evens.contains(&4));
//! assert!(!evens.contains(&3));
//!
//! let odds = Carrier::predicate(|x: &i32| x % 2 != 0);
//! let integers = evens.union(&odds);
//! assert!(integers.contains(&3));
//! assert!(integers.contains(&4));
//! ```

use std::fmt;
use std::sync::Arc;

/// A subset of the element type `E`, represented as a membership test.
///
/// Two cases exist:
///
/// - [`Universal`](Carrier::Universal): every value of `E` is a member.
/// - [`Predicate`](Carrier::Predicate): a value is a member iff the stored
///   closure returns `true` for it.
///
/// Membership testing is total and side-effect free: [`contains`](Self::contains)
/// never fails and never mutates, and calling it twice with the same element
/// returns the same answer (predicates are required to be pure).
///
/// The predicate is stored behind an [`Arc`], so cloning a carrier is cheap
/// and carriers can be shared between threads without synchronization.
///
/// # Examples
///
/// ```rust
/// use magmars::carrier::Carrier;
///
/// let everything = Carrier::<i32>::universal();
/// assert!(everything.contains(&i32::MIN));
///
/// let positives = Carrier::predicate(|x: &i32| *x > 0);
/// assert!(positives.contains(&12));
/// assert!(!positives.contains(&-12));
/// ```
pub enum Carrier<E> {
    /// Every value of `E` is a member.
    Universal,
    /// A value is a member iff the predicate returns `true`.
    Predicate(Arc<dyn Fn(&E) -> bool + Send + Sync>),
}

impl<E> Carrier<E> {
    /// Returns the carrier containing every value of `E`.
    #[must_use]
    pub const fn universal() -> Self {
        Self::Universal
    }

    /// Returns a carrier whose members are the values satisfying `membership`.
    ///
    /// The predicate must be pure: same element in, same answer out, no side
    /// effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::carrier::Carrier;
    ///
    /// let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    /// assert!(evens.contains(&0));
    /// assert!(!evens.contains(&7));
    /// ```
    pub fn predicate(membership: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(membership))
    }

    /// Returns whether `element` is a member of this carrier.
    ///
    /// Total over `E`: this never fails, never mutates, and is stable across
    /// repeated calls.
    pub fn contains(&self, element: &E) -> bool {
        match self {
            Self::Universal => true,
            Self::Predicate(membership) => membership(element),
        }
    }
}

impl<E: 'static> Carrier<E> {
    /// Returns the carrier containing the members of `self` and of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::carrier::Carrier;
    ///
    /// let ones = Carrier::predicate(|x: &i32| *x == 1);
    /// let twos = Carrier::predicate(|x: &i32| *x == 2);
    /// let both = ones.union(&twos);
    /// assert!(both.contains(&1));
    /// assert!(both.contains(&2));
    /// assert!(!both.contains(&3));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Universal, _) | (_, Self::Universal) => Self::Universal,
            (Self::Predicate(left), Self::Predicate(right)) => {
                let left = Arc::clone(left);
                let right = Arc::clone(right);
                Self::predicate(move |element| left(element) || right(element))
            }
        }
    }

    /// Returns the carrier containing the members of both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::carrier::Carrier;
    ///
    /// let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    /// let positives = Carrier::predicate(|x: &i32| *x > 0);
    /// let positive_evens = evens.intersection(&positives);
    /// assert!(positive_evens.contains(&4));
    /// assert!(!positive_evens.contains(&-4));
    /// assert!(!positive_evens.contains(&3));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Universal, rest) | (rest, Self::Universal) => rest.clone(),
            (Self::Predicate(left), Self::Predicate(right)) => {
                let left = Arc::clone(left);
                let right = Arc::clone(right);
                Self::predicate(move |element| left(element) && right(element))
            }
        }
    }
}

impl<E: PartialEq + Send + Sync + 'static> Carrier<E> {
    /// Returns the carrier whose only member is `element`.
    #[must_use]
    pub fn singleton(element: E) -> Self {
        Self::predicate(move |candidate| *candidate == element)
    }

    /// Returns a carrier with `element` added to the members of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::carrier::Carrier;
    ///
    /// let binary = Carrier::predicate(|x: &i32| *x == 0 || *x == 1);
    /// assert!(!binary.contains(&2));
    /// let ternary = binary.inserting(2);
    /// assert!(ternary.contains(&2));
    /// assert!(ternary.contains(&0));
    /// ```
    #[must_use]
    pub fn inserting(&self, element: E) -> Self {
        self.union(&Self::singleton(element))
    }

    /// Returns a carrier with `element` removed from the members of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magmars::carrier::Carrier;
    ///
    /// let reals = Carrier::<i32>::universal();
    /// let punctured = reals.without(0);
    /// assert!(punctured.contains(&1));
    /// assert!(!punctured.contains(&0));
    /// ```
    #[must_use]
    pub fn without(&self, element: E) -> Self {
        match self {
            Self::Universal => Self::predicate(move |candidate| *candidate != element),
            Self::Predicate(membership) => {
                let membership = Arc::clone(membership);
                Self::predicate(move |candidate| {
                    *candidate != element && membership(candidate)
                })
            }
        }
    }
}

impl<E> Clone for Carrier<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Universal => Self::Universal,
            Self::Predicate(membership) => Self::Predicate(Arc::clone(membership)),
        }
    }
}

impl<E> Default for Carrier<E> {
    /// The universal carrier.
    fn default() -> Self {
        Self::Universal
    }
}

impl<E> fmt::Debug for Carrier<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => formatter.write_str("Carrier::Universal"),
            Self::Predicate(_) => formatter.write_str("Carrier::Predicate"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
