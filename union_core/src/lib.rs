//! This crate holds the untagged layers of a tagged union.
//!
//! It provides a recursive union that stores exactly one of a list of types in shared memory,
//! a way to address the members of that union by position or by type,
//! and a compile time choice of the narrowest unsigned integer able to count them.
//! None of it knows which member is currently stored; that is the job of the crate on top.

#![no_std]

pub mod index;
pub mod narrow;
pub mod union;

pub use index::{Here, There};
pub use narrow::{bits_for, Bits, Unsigned, Width};
pub use union::{Cons, Member, Nil, Slot, TypeUnion, Untagged};
