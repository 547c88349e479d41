//! Recursive untagged union storage.
//!
//! A list of member types `A, B, C` is stored as `Cons<A, Cons<B, Cons<C, Nil>>>`:
//! either the head, or the storage of the rest of the list.
//! Every member lives at offset zero, so the whole thing is as large as its largest member,
//! rounded up to the strictest alignment among them.
//!
//! Nothing here remembers which member was written last.
//!
//! ```
//! use union_core::{Cons, Nil, Untagged};
//! use union_core::index::{I0, I1};
//!
//! let mut storage = Untagged::<Cons<u8, Cons<u64, Nil>>>::uninit();
//! storage.write::<I1>(1 << 40);
//! assert_eq!(unsafe { *storage.read::<I1>() }, 1 << 40);
//!
//! storage.write::<I0>(7);
//! assert_eq!(unsafe { *storage.read::<I0>() }, 7);
//! ```
//!
//! Positions past the end of the list do not exist:
//! ```compile_fail
//! use union_core::{Cons, Nil, Untagged};
//! use union_core::index::I2;
//!
//! let mut storage = Untagged::<Cons<u8, Cons<u64, Nil>>>::uninit();
//! storage.write::<I2>(0);
//! ```

use core::any::TypeId;
use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

use crate::index::{Here, Position, There};

/// Storage for the empty list.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Clone, Copy)]
pub struct Nil;

/// Storage for either `H`, or one of the members stored by `T`.
#[repr(C)]
#[derive(Copy, Clone)]
pub union Cons<H: Copy, T: Copy> {
    head: H,
    tail: T,
}

/// Addresses the member at position `I`.
///
/// # Safety
///
/// `project` and `project_mut` must return a pointer to storage for [`Slot::Output`]
/// that lies within the value pointed to by `this`.
pub unsafe trait Slot<I: Position>: Copy {
    /// The member at position `I`.
    type Output: Copy;

    /// Numeric value of `I`.
    const INDEX: usize = I::VALUE;

    /// Returns a pointer to the member at position `I`.
    ///
    /// # Safety
    ///
    /// `this` must point to an allocation at least as large as `Self`.
    unsafe fn project(this: *const Self) -> *const Self::Output;

    /// Mutable counterpart of [`Slot::project`].
    ///
    /// # Safety
    ///
    /// `this` must point to an allocation at least as large as `Self`.
    unsafe fn project_mut(this: *mut Self) -> *mut Self::Output;
}

unsafe impl<H: Copy, T: Copy> Slot<Here> for Cons<H, T> {
    type Output = H;

    #[inline]
    unsafe fn project(this: *const Self) -> *const H {
        ptr::addr_of!((*this).head)
    }

    #[inline]
    unsafe fn project_mut(this: *mut Self) -> *mut H {
        ptr::addr_of_mut!((*this).head)
    }
}

unsafe impl<H: Copy, T: Copy, I: Position> Slot<There<I>> for Cons<H, T>
where
    T: Slot<I>,
{
    type Output = <T as Slot<I>>::Output;

    #[inline]
    unsafe fn project(this: *const Self) -> *const Self::Output {
        T::project(ptr::addr_of!((*this).tail))
    }

    #[inline]
    unsafe fn project_mut(this: *mut Self) -> *mut Self::Output {
        T::project_mut(ptr::addr_of_mut!((*this).tail))
    }
}

/// Finds `T` in a list. `I` is its position, and is left to inference:
/// it is only found if `T` occurs exactly once.
///
/// A list that does not contain `T` has no impl, and a list that contains it twice has two,
/// so neither can name `T`.
pub trait Member<T, I: Position>: Slot<I, Output = T> {}

impl<H: Copy, T: Copy> Member<H, Here> for Cons<H, T> {}

impl<H: Copy, T: Copy, U, I: Position> Member<U, There<I>> for Cons<H, T> where T: Member<U, I> {}

/// Raw storage for one member of `U`, without any record of which.
#[repr(transparent)]
pub struct Untagged<U: Copy> {
    data: MaybeUninit<U>,
}

impl<U: Copy> Untagged<U> {
    /// Storage with unspecified contents.
    #[inline]
    pub const fn uninit() -> Self {
        Self {
            data: MaybeUninit::uninit(),
        }
    }

    /// Reinterprets the storage as the member at position `I`.
    ///
    /// # Safety
    ///
    /// The last value written must have been written at position `I`.
    #[inline]
    pub unsafe fn read<I: Position>(&self) -> &<U as Slot<I>>::Output
    where
        U: Slot<I>,
    {
        &*U::project(self.data.as_ptr())
    }

    /// Mutable counterpart of [`Untagged::read`].
    ///
    /// # Safety
    ///
    /// The last value written must have been written at position `I`.
    #[inline]
    pub unsafe fn read_mut<I: Position>(&mut self) -> &mut <U as Slot<I>>::Output
    where
        U: Slot<I>,
    {
        &mut *U::project_mut(self.data.as_mut_ptr())
    }

    /// Overwrites the storage with `value` at position `I`.
    /// Whatever was stored before is forgotten, not dropped; members are `Copy`.
    #[inline]
    pub fn write<I: Position>(&mut self, value: <U as Slot<I>>::Output)
    where
        U: Slot<I>,
    {
        // SAFETY: `data` is a `U`, and `Slot` projects within it.
        unsafe { ptr::write(U::project_mut(self.data.as_mut_ptr()), value) }
    }
}

impl<U: Copy> Clone for Untagged<U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Copy> Copy for Untagged<U> {}

impl<U: Copy> Default for Untagged<U> {
    #[inline]
    fn default() -> Self {
        Self::uninit()
    }
}

impl<U: Copy> fmt::Debug for Untagged<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Untagged")
            .field("size", &core::mem::size_of::<U>())
            .finish_non_exhaustive()
    }
}

/// Maps a tuple of member types to its recursive union.
pub trait TypeUnion {
    /// The union that can hold any one of the tuple's types.
    type Union: Copy;

    /// The number of members.
    const COUNT: usize;

    /// Returns `true` if no type occurs twice in the tuple.
    fn distinct() -> bool;
}

/// Returns `true` if no two of `ids` are equal.
pub fn distinct(ids: &[TypeId]) -> bool {
    ids.iter()
        .enumerate()
        .all(|(i, id)| !ids[i + 1..].contains(id))
}

macro_rules! Cons {
    () => (Nil);
    ($head:ident $(, $tail:ident)*) => (Cons<$head, Cons!($($tail),*)>);
}

macro_rules! count {
    () => (0);
    ($head:ident $(, $tail:ident)*) => (1 + count!($($tail),*));
}

macro_rules! GenUnion {
    ($generic:ident $(, $generics:ident)*) => (
        impl<$generic: Copy + 'static $(, $generics: Copy + 'static)*> TypeUnion for ($generic, $($generics,)*) {
            type Union = Cons!($generic $(, $generics)*);

            const COUNT: usize = count!($generic $(, $generics)*);

            #[inline]
            fn distinct() -> bool {
                distinct(&[TypeId::of::<$generic>() $(, TypeId::of::<$generics>())*])
            }
        }

        GenUnion!($($generics),*);
    );

    () => ();
}

GenUnion!(P, O, N, M, L, K, J, I, H, G, F, E, D, C, B, A);
