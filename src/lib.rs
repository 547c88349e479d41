//! This crate provides tagged unions over a fixed list of `Copy` types.
//!
//! A [`TaggedUnion`] stores one of its alternatives in shared memory,
//! next to a discriminant no wider than it needs to be.
//! Which types are alternatives is checked when the program is built:
//! constructing or reading a type outside the list does not compile.
//! Reading an alternative that is not the one currently held is checked when the program runs,
//! and fails with [`InactiveAlternative`].
//!
//! [`tagged_union!`] declares a named union with a kind enum, and [`dispatch!`] branches over it.

pub mod error;
pub mod macros;
pub mod tagged;

pub use error::InactiveAlternative;
pub use tagged::{Alternatives, TaggedUnion};

pub use union_core::index::{self, Position};
pub use union_core::{narrowest_unsigned, Cons, Member, Nil, Slot, Unsigned};
