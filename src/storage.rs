//! Slot adapters selecting how each side of an [`Either`](crate::Either) is stored.
//!
//! A slot is always an `Option` of the adapter's [`Storage::Value`]; `None` is the
//! absent state of the inactive side. What differs is the value kept inside:
//!
//! - [`Inline<T>`] keeps `T` itself. The absent state is an explicit empty
//!   `Option<T>`, so no value of `T` (zero, empty string, ...) doubles as "absent".
//! - [`Heap<T>`] keeps a shared `Arc<T>`. `Option<Arc<T>>` uses the null pointer
//!   niche, so the absent state is the natural null reference and costs nothing.
//!
//! Both adapters are uninhabited markers; they only exist at the type level.

use core::any::Any;
use core::marker::PhantomData;
use std::sync::Arc;

mod sealed {
    pub trait Sealed {}
}

/// Type-level description of one side of an [`Either`](crate::Either).
///
/// Sealed: the only implementors are [`Inline`] and [`Heap`].
pub trait Storage: sealed::Sealed {
    /// The declared payload type.
    type Payload: ?Sized;
    /// What the caller hands in at construction and gets back from extraction.
    type Value;

    /// Borrows the declared payload out of a stored value.
    fn payload(value: &Self::Value) -> &Self::Payload;

    /// Name of the declared payload type, used in diagnostics.
    #[inline]
    fn type_name() -> &'static str {
        core::any::type_name::<Self::Payload>()
    }
}

/// A side whose payload can be handed out behind a type-erased shared handle.
///
/// The handle always erases the declared payload `T`, never the slot's
/// wrapper, so `downcast::<T>()` works whichever adapter stored it.
pub trait Erase: Storage {
    /// Type-erased handle to `value`'s payload. [`Heap`] shares its
    /// allocation; [`Inline`] clones the payload into a fresh one.
    fn erase(value: &Self::Value) -> Arc<dyn Any + Send + Sync>;
}

/// Stores `T` by value, with an optional wrapper for the absent state.
pub struct Inline<T>(PhantomData<T>);

/// Stores `T` behind a shared, reference-counted pointer whose null niche is the
/// absent state. Cloning the container or extracting the payload shares the
/// same allocation.
pub struct Heap<T: ?Sized>(PhantomData<T>);

impl<T> sealed::Sealed for Inline<T> {}

impl<T> Storage for Inline<T> {
    type Payload = T;
    type Value = T;

    #[inline]
    fn payload(value: &T) -> &T {
        value
    }
}

impl<T: Clone + Any + Send + Sync> Erase for Inline<T> {
    #[inline]
    fn erase(value: &T) -> Arc<dyn Any + Send + Sync> {
        Arc::new(value.clone())
    }
}

impl<T: ?Sized> sealed::Sealed for Heap<T> {}

impl<T: ?Sized> Storage for Heap<T> {
    type Payload = T;
    type Value = Arc<T>;

    #[inline]
    fn payload(value: &Arc<T>) -> &T {
        value
    }
}

impl<T: Any + Send + Sync> Erase for Heap<T> {
    #[inline]
    fn erase(value: &Arc<T>) -> Arc<dyn Any + Send + Sync> {
        Arc::clone(value) as Arc<dyn Any + Send + Sync>
    }
}
