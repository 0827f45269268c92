//! # magmars
//!
//! Dynamically checked algebraic structures for Rust: carrier sets,
//! property-enforcing binary operations, and the magma family built on top
//! of them.
//!
//! ## Overview
//!
//! A raw binary function claims nothing about the laws it satisfies.
//! magmars lets you state those claims and have them checked against real
//! inputs:
//!
//! - **Carriers**: a set of elements, either universal or defined by a
//!   membership predicate ([`carrier`]).
//! - **Operations**: decorator layers that enforce associativity,
//!   commutativity, a designated identity, or custom named properties on
//!   every call, while logging each call into an inspectable history
//!   ([`operation`]).
//! - **Structures**: carrier + checked operation composites - [`Magma`],
//!   [`Groupoid`], [`UnitalMagma`], [`Monoid`] ([`structure`]).
//! - **Sharing**: a mutex-guarded handle for using one wrapper chain from
//!   several threads ([`sync`], feature `sync`).
//!
//! Checks run eagerly on every apply and fail with typed errors naming the
//! violated law and the offending inputs; a failed check never poisons the
//! wrapper. This is a verification aid for small finite or samplable
//! systems, not a theorem prover: a passing check covers exactly the inputs
//! it saw.
//!
//! ## Feature Flags
//!
//! - `sync`: thread-safe shared wrappers (enabled by default).
//!
//! ## Example
//!
//! ```rust
//! use magmars::prelude::*;
//!
//! let addition = Unital::new(
//!     Commutative::new(Associative::new(Operation::new(|a: i32, b| a + b))),
//!     0,
//! );
//! let mut integers = Monoid::new(Carrier::universal(), addition, 0).unwrap();
//!
//! assert_eq!(integers.apply(2, 3).unwrap(), 5);
//! assert!(integers.is(&Property::Commutative));
//! assert_eq!(integers.history().len(), 1);
//! ```
//!
//! [`Magma`]: structure::Magma
//! [`Groupoid`]: structure::Groupoid
//! [`UnitalMagma`]: structure::UnitalMagma
//! [`Monoid`]: structure::Monoid

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use magmars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::carrier::Carrier;
    pub use crate::error::{
        AssociativityError, CommutativityError, IdentityError, PropertyError,
        StructureError,
    };
    pub use crate::operation::{
        Associative, BinaryOperation, Checked, Commutative, History, Operation,
        Property, Unital,
    };
    pub use crate::structure::{
        AlgebraicStructure, Groupoid, Magma, Monoid, UnitalMagma,
    };

    #[cfg(feature = "sync")]
    pub use crate::sync::SharedOperation;
}

pub mod carrier;
pub mod error;
pub mod operation;
pub mod structure;

#[cfg(feature = "sync")]
pub mod sync;
