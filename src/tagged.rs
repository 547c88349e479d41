use std::fmt;
use std::marker::PhantomData;

use union_core::index::Position;
use union_core::{Member, TypeUnion, Unsigned, Untagged};

use crate::error::InactiveAlternative;

/// A fixed list of alternatives a [`TaggedUnion`] can hold.
///
/// Implemented for tuples of up to sixteen `Copy` types,
/// and for the kind enum of every union declared with [`tagged_union!`](crate::tagged_union).
pub trait Alternatives {
    /// Untagged storage for one alternative, see [`union_core::Cons`].
    type Storage: Copy;

    /// Narrowest unsigned integer that can count every alternative, plus one for "none".
    type Tag: Unsigned;

    /// The number of alternatives.
    const COUNT: usize;

    /// Returns `true` if no alternative is listed twice.
    ///
    /// Declared kind enums are checked when they are declared, so this is only
    /// consulted for tuples.
    #[inline]
    fn distinct() -> bool {
        true
    }
}

/// Holds exactly one of the alternatives in `L`, and remembers which.
///
/// ```
/// use taggedunion::TaggedUnion;
///
/// let mut value = TaggedUnion::<(u8, char, [u16; 2])>::create('x');
/// assert_eq!(value.active_index(), 1);
/// assert_eq!(value.get::<char, _>(), Ok(&'x'));
/// assert!(value.get::<u8, _>().is_err());
///
/// value.set([1u16, 2]);
/// assert_eq!(value.active_index(), TaggedUnion::<(u8, char, [u16; 2])>::index_of::<[u16; 2], _>());
/// ```
///
/// Types that are not alternatives can not be named at all:
/// ```compile_fail
/// use taggedunion::TaggedUnion;
///
/// let value = TaggedUnion::<(u8, char)>::create('x');
/// let _ = value.get::<u32, _>();
/// ```
pub struct TaggedUnion<L: Alternatives> {
    storage: Untagged<L::Storage>,
    tag: L::Tag,
    marker: PhantomData<L>,
}

impl<L: Alternatives> TaggedUnion<L> {
    /// The active index of a union that never held anything.
    pub const NONE: usize = L::COUNT;

    /// Creates a union that holds nothing yet.
    ///
    /// # Panics
    ///
    /// If the same type is listed twice in `L`.
    ///
    /// ```should_panic
    /// use taggedunion::TaggedUnion;
    ///
    /// let _ = TaggedUnion::<(u8, char, u8)>::new();
    /// ```
    #[inline]
    #[track_caller]
    pub fn new() -> Self {
        assert!(L::distinct(), "alternatives of a tagged union must be distinct types");

        Self {
            storage: Untagged::uninit(),
            tag: L::Tag::from_index(Self::NONE),
            marker: PhantomData,
        }
    }

    /// Returns the position of `T` in the alternatives.
    /// Only callable when `T` is one of them; the position `I` is inferred.
    #[inline]
    pub const fn index_of<T, I: Position>() -> usize
    where
        L::Storage: Member<T, I>,
    {
        I::VALUE
    }

    /// Returns the position of the alternative currently held, or [`Self::NONE`].
    #[inline]
    pub fn active_index(&self) -> usize {
        self.tag.to_index()
    }

    /// Returns the raw discriminant.
    #[inline]
    pub fn discriminant(&self) -> L::Tag {
        self.tag
    }

    #[inline]
    pub fn is_inhabited(&self) -> bool {
        self.active_index() != Self::NONE
    }

    /// Returns `true` if this union currently holds a `T`.
    #[inline]
    pub fn holds<T, I: Position>(&self) -> bool
    where
        L::Storage: Member<T, I>,
    {
        self.active_index() == Self::index_of::<T, I>()
    }

    /// Creates a union holding `value`.
    #[inline]
    pub fn create<T, I: Position>(value: T) -> Self
    where
        L::Storage: Member<T, I>,
    {
        let mut union = Self::new();
        union.set::<T, I>(value);
        union
    }

    /// Creates a union holding the `T` built by `f`.
    #[inline]
    pub fn create_with<T, I: Position, F>(f: F) -> Self
    where
        L::Storage: Member<T, I>,
        F: FnOnce() -> T,
    {
        Self::create::<T, I>(f())
    }

    /// Replaces whatever this union held with `value`.
    #[inline]
    pub fn set<T, I: Position>(&mut self, value: T)
    where
        L::Storage: Member<T, I>,
    {
        self.storage.write::<I>(value);
        self.tag = L::Tag::from_index(I::VALUE);
    }

    /// Returns a reference to the held `T`.
    ///
    /// # Errors
    ///
    /// [`InactiveAlternative`] when the union holds anything else, or nothing.
    #[inline]
    pub fn get<T, I: Position>(&self) -> Result<&T, InactiveAlternative>
    where
        L::Storage: Member<T, I>,
    {
        self.check::<T, I>()?;

        // SAFETY: the tag says the last write was at `I`.
        Ok(unsafe { self.storage.read::<I>() })
    }

    /// Returns a mutable reference to the held `T`.
    ///
    /// # Errors
    ///
    /// [`InactiveAlternative`] when the union holds anything else, or nothing.
    #[inline]
    pub fn get_mut<T, I: Position>(&mut self) -> Result<&mut T, InactiveAlternative>
    where
        L::Storage: Member<T, I>,
    {
        self.check::<T, I>()?;

        // SAFETY: the tag says the last write was at `I`.
        Ok(unsafe { self.storage.read_mut::<I>() })
    }

    /// Returns a copy of the held `T`.
    ///
    /// # Errors
    ///
    /// [`InactiveAlternative`] when the union holds anything else, or nothing.
    #[inline]
    pub fn copied<T, I: Position>(&self) -> Result<T, InactiveAlternative>
    where
        L::Storage: Member<T, I>,
        T: Copy,
    {
        self.get::<T, I>().copied()
    }

    /// Used by [`dispatch!`](crate::dispatch) after it matched the discriminant.
    #[doc(hidden)]
    #[track_caller]
    #[inline]
    pub fn case<T, I: Position>(&self) -> &T
    where
        L::Storage: Member<T, I>,
    {
        match self.get::<T, I>() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    #[doc(hidden)]
    #[track_caller]
    #[inline]
    pub fn case_mut<T, I: Position>(&mut self) -> &mut T
    where
        L::Storage: Member<T, I>,
    {
        match self.get_mut::<T, I>() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    fn check<T, I: Position>(&self) -> Result<(), InactiveAlternative>
    where
        L::Storage: Member<T, I>,
    {
        let active = self.active_index();
        if active == I::VALUE {
            return Ok(());
        }

        let err = InactiveAlternative {
            requested: std::any::type_name::<T>(),
            index: I::VALUE,
            active,
            count: L::COUNT,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = err.requested,
            index = err.index,
            active = err.active,
            uninhabited = err.is_uninhabited(),
            "inactive alternative access"
        );

        Err(err)
    }
}

impl<L: Alternatives> Clone for TaggedUnion<L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Alternatives> Copy for TaggedUnion<L> {}

impl<L: Alternatives> Default for TaggedUnion<L> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Alternatives> fmt::Debug for TaggedUnion<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let active = Some(self.active_index()).filter(|&index| index != Self::NONE);

        f.debug_struct("TaggedUnion")
            .field("active", &active)
            .field("count", &L::COUNT)
            .finish()
    }
}

macro_rules! count {
    () => (0);
    ($head:ident $(, $tail:ident)*) => (1 + count!($($tail),*));
}

macro_rules! GenAlternatives {
    ($generic:ident $(, $generics:ident)*) => (
        impl<$generic: Copy + 'static $(, $generics: Copy + 'static)*> Alternatives for ($generic, $($generics,)*) {
            type Storage = <Self as TypeUnion>::Union;
            type Tag = union_core::narrowest_unsigned!(count!($generic $(, $generics)*) + 1);
            const COUNT: usize = <Self as TypeUnion>::COUNT;

            #[inline]
            fn distinct() -> bool {
                <Self as TypeUnion>::distinct()
            }
        }

        GenAlternatives!($($generics),*);
    );

    () => ();
}

GenAlternatives!(P, O, N, M, L, K, J, I, H, G, F, E, D, C, B, A);
