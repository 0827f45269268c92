//! Property markers for binary operations.

use std::fmt;

/// A marker naming an algebraic property a wrapper chain can enforce.
///
/// Each marker has a corresponding validation over sample inputs, run
/// eagerly on every `apply` by the matching wrapper and lazily on demand by
/// [`BinaryOperation::holds_over`](super::BinaryOperation::holds_over).
///
/// # Examples
///
/// ```rust
/// use magmars::operation::Property;
///
/// let identity: Property<i32> = Property::WithIdentity(0);
/// assert_eq!(identity.name(), "identity");
/// assert_eq!(Property::<i32>::Other("idempotency").name(), "idempotency");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Property<E> {
    /// `(a . b) . c == a . (b . c)` for all elements.
    Associative,
    /// `a . b == b . a` for all elements.
    Commutative,
    /// The carried element is a two-sided unit: `a . e == e . a == a`.
    WithIdentity(E),
    /// A custom property registered under a name.
    Other(&'static str),
}

impl<E> Property<E> {
    /// A short human-readable name for the property.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Associative => "associativity",
            Self::Commutative => "commutativity",
            Self::WithIdentity(_) => "identity",
            Self::Other(name) => name,
        }
    }
}

impl<E> fmt::Display for Property<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
