//! The error raised by narrowing against the inactive side.

use crate::kind::Kind;

/// Narrowing extraction was attempted against the inactive side.
///
/// Always avoidable by checking [`Either::kind`](crate::Either::kind) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    requested: Kind,
    stored: Kind,
    type_name: &'static str,
}

impl TypeMismatch {
    pub(crate) const fn new(requested: Kind, type_name: &'static str) -> Self {
        Self {
            requested,
            stored: requested.other(),
            type_name,
        }
    }

    /// The side the caller asked for.
    #[inline]
    pub const fn requested(&self) -> Kind {
        self.requested
    }

    /// The side actually stored.
    #[inline]
    pub const fn stored(&self) -> Kind {
        self.stored
    }

    /// Name of the requested payload type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: requested the {} payload `{}` but the {} payload is stored",
            self.requested, self.type_name, self.stored
        )
    }
}

impl std::error::Error for TypeMismatch {}
