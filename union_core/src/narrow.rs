//! Compile time selection of the narrowest unsigned integer that can hold a number of values.
//!
//! ```
//! use core::mem::size_of;
//! use union_core::narrowest_unsigned;
//!
//! assert_eq!(size_of::<narrowest_unsigned!(4)>(), 1);
//! assert_eq!(size_of::<narrowest_unsigned!(300)>(), 2);
//! assert_eq!(size_of::<narrowest_unsigned!(70_000)>(), 4);
//! ```
//!
//! There is no integer for zero values:
//! ```compile_fail
//! let _x: union_core::narrowest_unsigned!(0) = 0;
//! ```
//!
//! Nor for more values than a `u64` can tell apart:
//! ```compile_fail
//! let _x: union_core::narrowest_unsigned!(u64::MAX as u128 + 1) = 0;
//! ```

use core::fmt::Debug;
use core::hash::Hash;

/// Returns the width in bits of the narrowest unsigned integer that has `count` distinct values.
///
/// # Panics
///
/// When `count` is zero, or larger than the number of values a `u64` holds.
/// In a const context, such as [`narrowest_unsigned!`](crate::narrowest_unsigned), that is a build failure.
pub const fn bits_for(count: u128) -> u32 {
    match count {
        0 => panic!("there is no integer type for zero values"),
        0x1..=0xFF => 8,
        0x100..=0xFFFF => 16,
        0x1_0000..=0xFFFF_FFFF => 32,
        0x1_0000_0000..=0xFFFF_FFFF_FFFF_FFFF => 64,
        _ => panic!("no unsigned integer is wider than 64 bits"),
    }
}

/// Marker for an integer width, in bits.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Clone, Copy)]
pub struct Bits<const N: u32>;

/// Maps a [`Bits`] marker to the unsigned integer of that width.
pub trait Width {
    type Repr: Unsigned;
}

/// An unsigned integer used to count positions.
pub trait Unsigned: Copy + Eq + Ord + Hash + Debug + Default + 'static {
    const BITS: u32;

    /// The largest value, and so the largest count of positions this type can tell apart.
    const MAX: Self;

    /// Converts a position into `Self`.
    ///
    /// `index` must fit in `Self`; positions are always smaller than the count the type was selected for.
    fn from_index(index: usize) -> Self;

    fn to_index(self) -> usize;
}

macro_rules! unsigned {
    ($($bits:literal => $t:ty),*) => (
        $(
            impl Width for Bits<$bits> {
                type Repr = $t;
            }

            impl Unsigned for $t {
                const BITS: u32 = $bits;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_index(index: usize) -> Self {
                    debug_assert!(index as u128 <= <$t>::MAX as u128);
                    index as $t
                }

                #[inline]
                fn to_index(self) -> usize {
                    self as usize
                }
            }
        )*
    );
}

unsigned!(8 => u8, 16 => u16, 32 => u32, 64 => u64);

/// Names the narrowest unsigned integer type with at least `$count` distinct values.
///
/// `$count` must be a constant expression; it is converted to `u128` before selection.
#[macro_export]
macro_rules! narrowest_unsigned {
    ($count:expr) => {
        <$crate::narrow::Bits<{ $crate::narrow::bits_for(($count) as u128) }> as $crate::narrow::Width>::Repr
    };
}
