//! Declaring named tagged unions, and branching over them.
//!
//! ```
//! use taggedunion::{dispatch, tagged_union};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! pub struct Text([u8; 8]);
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! pub struct Number(i64);
//!
//! tagged_union! {
//!     /// A cell of a spreadsheet.
//!     pub union Cell: CellKind {
//!         Text,
//!         Number,
//!     }
//! }
//!
//! let cell = Cell::from(Number(42));
//! assert_eq!(cell.kind(), Some(CellKind::Number));
//!
//! let width = dispatch!(cell => CellKind {
//!     Text(text) => text.0.len(),
//!     Number(number) => number.0.to_string().len(),
//! });
//! assert_eq!(width, Some(2));
//! ```
//!
//! Every alternative must be a different type:
//! ```compile_fail
//! use taggedunion::tagged_union;
//!
//! #[derive(Clone, Copy)]
//! pub struct Number(i64);
//!
//! tagged_union! {
//!     pub union Twice: TwiceKind {
//!         Number,
//!         Number,
//!     }
//! }
//! ```

/// Declares a named tagged union, and an enum with one member per alternative.
///
/// ```
/// # use taggedunion::tagged_union;
/// # #[derive(Clone, Copy)] pub struct RelativeMove { pub delta_x: i32, pub delta_y: i32 }
/// # #[derive(Clone, Copy)] pub struct Button { pub code: u16, pub down: bool }
/// tagged_union! {
///     /// Something the mouse did.
///     pub union MouseEvent: MouseEventKind {
///         RelativeMove,
///         Button,
///     }
/// }
/// ```
///
/// expands to:
///
/// - `pub struct MouseEvent`, which dereferences to
///   [`TaggedUnion<MouseEventKind>`](crate::TaggedUnion) and inherits all of its methods,
///   with `new`, `create`, `create_with`, `index_of` and `NONE` returning or naming `MouseEvent`,
///   `kind()`, and a `From` impl for every alternative;
/// - `pub enum MouseEventKind { RelativeMove, Button }`, in declaration order.
///
/// Attributes are placed on the struct. Alternatives are named by their type,
/// so each must be a type name in scope; `use` with `as` renames anything else.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis union $name:ident : $kind:ident {
            $($alt:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default)]
        #[repr(transparent)]
        $vis struct $name($crate::TaggedUnion<$kind>);

        #[doc = concat!("The alternatives of [`", stringify!($name), "`], in declaration order.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $kind {
            $($alt),+
        }

        impl $crate::Alternatives for $kind {
            type Storage = $crate::__cons!($($alt),+);
            type Tag = $crate::narrowest_unsigned!($crate::__count!($($alt),+) + 1);
            const COUNT: usize = $crate::__count!($($alt),+);
        }

        #[allow(dead_code)]
        impl $kind {
            /// Every kind, in declaration order.
            pub const ALL: [$kind; $crate::__count!($($alt),+)] = [$($kind::$alt),+];

            /// Position of this kind's alternative.
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            #[inline]
            pub fn from_index(index: usize) -> ::core::option::Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Name of this kind's alternative.
            pub const fn name(self) -> &'static str {
                match self {
                    $($kind::$alt => stringify!($alt)),+
                }
            }
        }

        #[allow(dead_code)]
        impl $name {
            /// The active index of a union that never held anything.
            pub const NONE: usize = <$kind as $crate::Alternatives>::COUNT;

            /// Creates a union that holds nothing yet.
            #[inline]
            pub fn new() -> Self {
                Self($crate::TaggedUnion::new())
            }

            /// Returns the position of `T` in the alternatives.
            #[inline]
            pub const fn index_of<T, I: $crate::Position>() -> usize
            where
                <$kind as $crate::Alternatives>::Storage: $crate::Member<T, I>,
            {
                $crate::TaggedUnion::<$kind>::index_of::<T, I>()
            }

            /// Creates a union holding `value`.
            #[inline]
            pub fn create<T, I: $crate::Position>(value: T) -> Self
            where
                <$kind as $crate::Alternatives>::Storage: $crate::Member<T, I>,
            {
                Self($crate::TaggedUnion::create::<T, I>(value))
            }

            /// Creates a union holding the `T` built by `f`.
            #[inline]
            pub fn create_with<T, I: $crate::Position, F>(f: F) -> Self
            where
                <$kind as $crate::Alternatives>::Storage: $crate::Member<T, I>,
                F: FnOnce() -> T,
            {
                Self($crate::TaggedUnion::create_with::<T, I, F>(f))
            }

            /// Returns the kind of the alternative currently held, or `None` if it never held one.
            #[inline]
            pub fn kind(&self) -> ::core::option::Option<$kind> {
                $kind::from_index(self.0.active_index())
            }

            #[inline]
            pub fn into_inner(self) -> $crate::TaggedUnion<$kind> {
                self.0
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::TaggedUnion<$kind>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::core::ops::DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.kind()).finish()
            }
        }

        $(
            impl ::core::convert::From<$alt> for $name {
                #[inline]
                fn from(value: $alt) -> Self {
                    Self::create(value)
                }
            }
        )+

        // Each alternative is found exactly once, at the position of its kind.
        const _: () = {
            $(
                assert!($name::index_of::<$alt, _>() == $kind::$alt as usize);
            )+
        };
    };
}

/// Branches over the alternative a union currently holds,
/// binding a reference to it that is typed by the same name the branch is labelled with.
///
/// Evaluates to `Some` of the chosen arm, or `None` if the union never held anything.
///
/// Keyed on the kind enum, the `match` underneath is checked for exhaustiveness:
///
/// ```
/// # use taggedunion::{dispatch, tagged_union};
/// # #[derive(Clone, Copy)] pub struct RelativeMove { pub delta_x: i32, pub delta_y: i32 }
/// # #[derive(Clone, Copy)] pub struct Button { pub code: u16, pub down: bool }
/// # tagged_union! { pub union MouseEvent: MouseEventKind { RelativeMove, Button } }
/// let mut event = MouseEvent::from(RelativeMove { delta_x: 1, delta_y: 0 });
///
/// dispatch!(mut event => MouseEventKind {
///     RelativeMove(movement) => movement.delta_x *= 2,
///     Button(button) => button.down = !button.down,
/// });
///
/// let text = dispatch!(event => MouseEventKind {
///     RelativeMove(movement) => format!("move {} x {}", movement.delta_x, movement.delta_y),
///     Button(button) => format!("button code={} down={}", button.code, button.down),
/// });
/// assert_eq!(text.as_deref(), Some("move 2 x 0"));
/// ```
///
/// Without a kind, the arms are tried in order against the active index,
/// and a final `_` arm is taken for any held alternative that has no arm of its own.
/// This also works on a bare [`TaggedUnion`](crate::TaggedUnion):
///
/// ```
/// # use taggedunion::{dispatch, TaggedUnion};
/// type Value = TaggedUnion<(u8, char, f32)>;
///
/// let upper = |value: Value| {
///     dispatch!(value => {
///         u8(byte) => (*byte as char).to_ascii_uppercase(),
///         char(c) => c.to_ascii_uppercase(),
///         _ => '?',
///     })
/// };
/// assert_eq!(upper(Value::create('z')), Some('Z'));
/// assert_eq!(upper(Value::create(0.5f32)), Some('?'));
/// assert_eq!(upper(Value::new()), None);
/// ```
#[macro_export]
macro_rules! dispatch {
    (mut $value:expr => $kind:ident { $($alt:ident($bind:pat) => $body:expr),+ $(,)? }) => {{
        let variant = &mut $value;
        match variant.kind() {
            $(
                ::core::option::Option::Some($kind::$alt) => {
                    let $bind: &mut $alt = variant.case_mut::<$alt, _>();
                    ::core::option::Option::Some($body)
                }
            )+
            ::core::option::Option::None => ::core::option::Option::None,
        }
    }};

    ($value:expr => $kind:ident { $($alt:ident($bind:pat) => $body:expr),+ $(,)? }) => {{
        let variant = &$value;
        match variant.kind() {
            $(
                ::core::option::Option::Some($kind::$alt) => {
                    let $bind: &$alt = variant.case::<$alt, _>();
                    ::core::option::Option::Some($body)
                }
            )+
            ::core::option::Option::None => ::core::option::Option::None,
        }
    }};

    (mut $value:expr => { $($alt:ident($bind:pat) => $body:expr,)+ _ => $default:expr $(,)? }) => {{
        let variant = &mut $value;
        if !variant.is_inhabited() {
            ::core::option::Option::None
        }
        $(
            else if variant.holds::<$alt, _>() {
                let $bind: &mut $alt = variant.case_mut::<$alt, _>();
                ::core::option::Option::Some($body)
            }
        )+
        else {
            ::core::option::Option::Some($default)
        }
    }};

    ($value:expr => { $($alt:ident($bind:pat) => $body:expr,)+ _ => $default:expr $(,)? }) => {{
        let variant = &$value;
        if !variant.is_inhabited() {
            ::core::option::Option::None
        }
        $(
            else if variant.holds::<$alt, _>() {
                let $bind: &$alt = variant.case::<$alt, _>();
                ::core::option::Option::Some($body)
            }
        )+
        else {
            ::core::option::Option::Some($default)
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cons {
    () => ($crate::Nil);
    ($head:ident $(, $tail:ident)*) => ($crate::Cons<$head, $crate::__cons!($($tail),*)>);
}

#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => (0usize);
    ($head:ident $(, $tail:ident)*) => (1usize + $crate::__count!($($tail),*));
}
