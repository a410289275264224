//! Common contract for every parameterization.

use crate::kind::Kind;

/// Anything that carries a [`Kind`] tag.
///
/// Object safe, so containers of different parameterizations can be handled
/// through `&dyn Tagged` when only the tag matters. Type-erased payload access
/// stays on the inherent `Either::data` methods, which are only deprecation-free
/// when both sides live on the heap.
pub trait Tagged {
    /// Which payload is stored.
    fn kind(&self) -> Kind;

    /// `true` when the first payload is stored.
    #[inline]
    fn is_first(&self) -> bool {
        self.kind() == Kind::First
    }

    /// `true` when the second payload is stored.
    #[inline]
    fn is_second(&self) -> bool {
        self.kind() == Kind::Second
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    #[inline]
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}
