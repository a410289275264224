//! Construction by value type.
//!
//! A bare `T1` or `T2` is turned into an [`Either`] without naming the side.
//! Two blanket `From` impls would overlap whenever `T1 == T2`, so the side is
//! carried by an index type instead: [`AtFirst`] or [`AtSecond`]. The compiler
//! infers the index from the value type, and reports an ambiguity if both sides
//! accept it.
//!
//! ```
//! use std::sync::Arc;
//! use twain::{InlineOrHeap, IntoEither, Kind};
//!
//! let shape: InlineOrHeap<u32, String> = 12_u32.into_either();
//! let colour: InlineOrHeap<u32, String> = Arc::new(String::from("red")).into_either();
//! assert_eq!(shape.kind(), Kind::First);
//! assert_eq!(colour.kind(), Kind::Second);
//! ```
//!
//! Identical payload types leave the side undecidable:
//!
//! ```compile_fail
//! use twain::{Either, InlineOrInline};
//!
//! let twin: InlineOrInline<u8, u8> = Either::new(1_u8);
//! ```

use crate::either::Either;
use crate::storage::Storage;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::AtFirst {}
    impl Sealed for super::AtSecond {}
}

/// Index of the first side.
#[derive(Debug, Clone, Copy)]
pub struct AtFirst;

/// Index of the second side.
#[derive(Debug, Clone, Copy)]
pub struct AtSecond;

/// Marker for the two side indices.
pub trait Index: sealed::Sealed {}
impl Index for AtFirst {}
impl Index for AtSecond {}

/// Builds `Self` from a `V` placed on the side named by `I`.
pub trait Inject<V, I: Index>: Sized {
    /// Wraps `value`.
    fn inject(value: V) -> Self;
}

impl<A: Storage, B: Storage> Inject<A::Value, AtFirst> for Either<A, B> {
    #[inline]
    fn inject(value: A::Value) -> Self {
        Either::from_first(value)
    }
}

impl<A: Storage, B: Storage> Inject<B::Value, AtSecond> for Either<A, B> {
    #[inline]
    fn inject(value: B::Value) -> Self {
        Either::from_second(value)
    }
}

/// Method-call form of [`Inject`], available on every value.
pub trait IntoEither: Sized {
    /// Wraps `self` in whichever container the call site expects.
    #[inline]
    fn into_either<E, I>(self) -> E
    where
        I: Index,
        E: Inject<Self, I>,
    {
        E::inject(self)
    }
}

impl<V> IntoEither for V {}
