//! `Either`: a closed, two-variant container with checked narrowing.
//!
//! One generic container covers every storage combination. Each side picks a
//! [`Storage`] adapter, and the three combinations used in practice get aliases:
//!
//! | Alias | First slot | Second slot |
//! |---|---|---|
//! | [`InlineOrInline<T1, T2>`] | `Option<T1>` | `Option<T2>` |
//! | [`InlineOrHeap<T1, T2>`] | `Option<T1>` | `Option<Arc<T2>>` |
//! | [`HeapOrHeap<T1, T2>`] | `Option<Arc<T1>>` | `Option<Arc<T2>>` |
//!
//! The tag and both slots are written once, at construction, and never touched
//! again. Exactly one slot is populated, and it is the one the tag names.

use core::any::Any;
use core::fmt;
use std::sync::Arc;

use crate::error::TypeMismatch;
use crate::inject::{Index, Inject};
use crate::kind::Kind;
use crate::storage::{Erase, Heap, Inline, Storage};
use crate::tagged::Tagged;

/// A value holding exactly one of two statically known payloads.
///
/// Build one with [`from_first`](Self::from_first) / [`from_second`](Self::from_second),
/// or let the payload's type choose the side with [`Either::new`] or
/// [`IntoEither::into_either`](crate::IntoEither::into_either).
///
/// Equality, hashing, ordering and serialization are deliberately not provided;
/// compare the extracted payloads instead.
pub struct Either<A: Storage, B: Storage> {
    kind: Kind,
    first: Option<A::Value>,
    second: Option<B::Value>,
}

/// Both payloads stored inline.
pub type InlineOrInline<T1, T2> = Either<Inline<T1>, Inline<T2>>;
/// First payload inline, second behind a shared pointer.
pub type InlineOrHeap<T1, T2> = Either<Inline<T1>, Heap<T2>>;
/// Both payloads behind shared pointers.
pub type HeapOrHeap<T1, T2> = Either<Heap<T1>, Heap<T2>>;

impl<A: Storage, B: Storage> Either<A, B> {
    /// Stores a first-side payload.
    #[inline]
    pub const fn from_first(value: A::Value) -> Self {
        Self {
            kind: Kind::First,
            first: Some(value),
            second: None,
        }
    }

    /// Stores a second-side payload.
    #[inline]
    pub const fn from_second(value: B::Value) -> Self {
        Self {
            kind: Kind::Second,
            first: None,
            second: Some(value),
        }
    }

    /// Stores `value` on whichever side its type belongs to.
    ///
    /// The side is resolved at compile time. If both sides share a value type
    /// the call does not compile; use the named constructors instead.
    ///
    /// ```
    /// use twain::{Either, InlineOrInline, Kind};
    ///
    /// let n: InlineOrInline<u16, char> = Either::new(7u16);
    /// let c: InlineOrInline<u16, char> = Either::new('x');
    /// assert_eq!(n.kind(), Kind::First);
    /// assert_eq!(c.kind(), Kind::Second);
    /// ```
    #[inline]
    pub fn new<V, I>(value: V) -> Self
    where
        I: Index,
        Self: Inject<V, I>,
    {
        <Self as Inject<V, I>>::inject(value)
    }

    /// Which payload is stored.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// `true` when the first payload is stored.
    #[inline]
    pub const fn is_first(&self) -> bool {
        matches!(self.kind, Kind::First)
    }

    /// `true` when the second payload is stored.
    #[inline]
    pub const fn is_second(&self) -> bool {
        matches!(self.kind, Kind::Second)
    }

    /// Borrows the first payload if it is the stored one.
    #[inline]
    pub fn first(&self) -> Option<&A::Value> {
        self.first.as_ref()
    }

    /// Borrows the second payload if it is the stored one.
    #[inline]
    pub fn second(&self) -> Option<&B::Value> {
        self.second.as_ref()
    }

    /// Narrows to the first payload.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the second payload is stored.
    pub fn as_first(&self) -> Result<&A::Value, TypeMismatch> {
        self.first
            .as_ref()
            .ok_or_else(|| mismatch(Kind::First, A::type_name()))
    }

    /// Narrows to the second payload.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the first payload is stored.
    pub fn as_second(&self) -> Result<&B::Value, TypeMismatch> {
        self.second
            .as_ref()
            .ok_or_else(|| mismatch(Kind::Second, B::type_name()))
    }

    /// Consumes the container, yielding the first payload.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the second payload is stored.
    pub fn into_first(self) -> Result<A::Value, TypeMismatch> {
        self.first
            .ok_or_else(|| mismatch(Kind::First, A::type_name()))
    }

    /// Consumes the container, yielding the second payload.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the first payload is stored.
    pub fn into_second(self) -> Result<B::Value, TypeMismatch> {
        self.second
            .ok_or_else(|| mismatch(Kind::Second, B::type_name()))
    }

    /// Borrows the stored payload as `Ok` (first) or `Err` (second).
    ///
    /// Handy for exhaustive `match` without going through the tag.
    pub fn as_result(&self) -> Result<&A::Value, &B::Value> {
        match (self.kind, &self.first, &self.second) {
            (Kind::First, Some(value), _) => Ok(value),
            (Kind::Second, _, Some(value)) => Err(value),
            _ => unreachable!("either slot does not match its tag"),
        }
    }
}

#[cold]
fn mismatch(requested: Kind, type_name: &'static str) -> TypeMismatch {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        requested = %requested,
        stored = %requested.other(),
        type_name,
        "either narrowing failed"
    );
    TypeMismatch::new(requested, type_name)
}

impl<T1, B: Storage> Either<Heap<T1>, B> {
    /// Allocates `value` and stores it as the first payload.
    #[inline]
    pub fn from_first_value(value: T1) -> Self {
        Self::from_first(Arc::new(value))
    }
}

impl<A: Storage, T2> Either<A, Heap<T2>> {
    /// Allocates `value` and stores it as the second payload.
    #[inline]
    pub fn from_second_value(value: T2) -> Self {
        Self::from_second(Arc::new(value))
    }
}

impl<A: Erase, B: Erase> Either<A, B> {
    fn erased(&self) -> Arc<dyn Any + Send + Sync> {
        match self.as_result() {
            Ok(first) => A::erase(first),
            Err(second) => B::erase(second),
        }
    }
}

impl<T1, T2> Either<Heap<T1>, Heap<T2>>
where
    T1: Any + Send + Sync,
    T2: Any + Send + Sync,
{
    /// Type-erased handle to the stored payload.
    ///
    /// Shares the existing allocation; nothing is copied, so the handle is
    /// pointer-identical with what [`as_first`](Self::as_first) or
    /// [`as_second`](Self::as_second) return.
    pub fn data(&self) -> Arc<dyn Any + Send + Sync> {
        self.erased()
    }
}

impl<T1, B: Erase> Either<Inline<T1>, B>
where
    T1: Clone + Any + Send + Sync,
{
    /// Type-erased handle to the stored payload.
    ///
    /// An inline payload is cloned into a fresh allocation; a heap payload is
    /// shared. Either way the handle downcasts to the declared payload type.
    #[deprecated(note = "clones an inline payload into a new allocation; narrow with `as_first`/`as_second` instead")]
    pub fn data(&self) -> Arc<dyn Any + Send + Sync> {
        self.erased()
    }
}

impl<T1, T2> Either<Heap<T1>, Inline<T2>>
where
    T1: Any + Send + Sync,
    T2: Clone + Any + Send + Sync,
{
    /// Type-erased handle to the stored payload.
    ///
    /// An inline payload is cloned into a fresh allocation; a heap payload is
    /// shared. Either way the handle downcasts to the declared payload type.
    #[deprecated(note = "clones an inline payload into a new allocation; narrow with `as_first`/`as_second` instead")]
    pub fn data(&self) -> Arc<dyn Any + Send + Sync> {
        self.erased()
    }
}

impl<A: Storage, B: Storage> Tagged for Either<A, B> {
    #[inline]
    fn kind(&self) -> Kind {
        self.kind
    }
}

impl<A: Storage, B: Storage> Clone for Either<A, B>
where
    A::Value: Clone,
    B::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<A: Storage, B: Storage> Copy for Either<A, B>
where
    A::Value: Copy,
    B::Value: Copy,
{
}

impl<A: Storage, B: Storage> fmt::Debug for Either<A, B>
where
    A::Payload: fmt::Debug,
    B::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_result() {
            Ok(first) => f.debug_tuple("First").field(&A::payload(first)).finish(),
            Err(second) => f.debug_tuple("Second").field(&B::payload(second)).finish(),
        }
    }
}
