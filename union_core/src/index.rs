//! Type level positions into a list of union members.
//!
//! A position is either [`Here`], the head of the list, or [`There<I>`], position `I` of the tail.
//! The aliases `I0` to `I15` spell out the first sixteen.

use core::marker::PhantomData;

/// The first member of a list.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Clone, Copy)]
pub struct Here;

/// Position `I` of the tail of a list.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Clone, Copy)]
pub struct There<I>(PhantomData<I>);

/// Numeric value of a position.
pub trait Position {
    const VALUE: usize;
}

impl Position for Here {
    const VALUE: usize = 0;
}

impl<I: Position> Position for There<I> {
    const VALUE: usize = I::VALUE + 1;
}

macro_rules! IndexAlias {
    ($prev:ident, $name:ident $(, $names:ident)*) => (
        #[doc = concat!("The position after [`", stringify!($prev), "`].")]
        pub type $name = There<$prev>;

        IndexAlias!($name $(, $names)*);
    );

    ($last:ident) => ();
}

/// The first position.
pub type I0 = Here;

IndexAlias!(I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11, I12, I13, I14, I15);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_count_up() {
        assert_eq!(I0::VALUE, 0);
        assert_eq!(I1::VALUE, 1);
        assert_eq!(I7::VALUE, 7);
        assert_eq!(I15::VALUE, 15);
        assert_eq!(<There<There<Here>>>::VALUE, 2);
    }
}
