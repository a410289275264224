//! The tag identifying which payload an [`Either`](crate::Either) holds.

use core::fmt;

/// Which of the two declared payload types is stored.
///
/// The tag is fixed when the container is built and never changes afterwards;
/// both states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    /// The payload is of the first declared type (`T1`).
    First,
    /// The payload is of the second declared type (`T2`).
    Second,
}

impl Kind {
    /// Returns the opposite tag.
    #[inline]
    pub const fn other(self) -> Kind {
        match self {
            Kind::First => Kind::Second,
            Kind::Second => Kind::First,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::First => "first",
            Kind::Second => "second",
        })
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Kind {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        prop_oneof![Just(Kind::First), Just(Kind::Second)].boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        assert_eq!(Kind::First.other(), Kind::Second);
        assert_eq!(Kind::Second.other(), Kind::First);
        assert_eq!(Kind::First.other().other(), Kind::First);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kind::First.to_string(), "first");
        assert_eq!(Kind::Second.to_string(), "second");
    }
}
