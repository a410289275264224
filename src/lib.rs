//! # `twain` - Closed Two-Way Either Containers
//!
//! A value that is known to be one of exactly two shapes, tagged with which one
//! is present and narrowed back out with a checked extraction. No boxing into a
//! common base, no runtime type inspection of an open set.
//!
//! ## Guarantees
//!
//! - **Exactly one payload**: the tag and the two slots are written together at
//!   construction. The slot the tag names holds the payload; the other is empty.
//! - **Immutable**: nothing mutates a built container. A different payload
//!   means a different container.
//! - **Collision-free absence**: an empty inline slot is an empty `Option`, an
//!   empty heap slot is a null `Arc` niche. No stored value (zero, empty string)
//!   can be mistaken for "absent".
//! - **Checked narrowing**: asking for the inactive side yields
//!   [`TypeMismatch`], never a default value.
//!
//! ## Storage Combinations
//!
//! The container is generic over two [`Storage`] adapters:
//!
//! 1. **[`InlineOrInline<T1, T2>`]**: both payloads inline.
//! 2. **[`InlineOrHeap<T1, T2>`]**: first inline, second behind an `Arc`.
//! 3. **[`HeapOrHeap<T1, T2>`]**: both behind an `Arc`. Only this one offers an
//!    unrestricted type-erased [`data`](Either::data) handle, since erasing an
//!    `Arc` copies nothing. The inline combinations keep a deprecated `data`
//!    that clones an inline payload into a new allocation. Every `data` handle
//!    downcasts to the declared payload type.
//!
//! ## Example
//!
//! ```rust
//! use twain::{Either, InlineOrInline, IntoEither, Kind};
//!
//! let answer: InlineOrInline<i32, String> = 42_i32.into_either();
//! assert_eq!(answer.kind(), Kind::First);
//! assert_eq!(answer.as_first(), Ok(&42));
//! assert!(answer.as_second().is_err());
//!
//! let label: InlineOrInline<i32, String> = Either::from_second("x".to_string());
//! match label.as_result() {
//!     Ok(n) => println!("number {n}"),
//!     Err(s) => assert_eq!(s, "x"),
//! }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod either;
pub mod error;
pub mod inject;
pub mod kind;
pub mod storage;
pub mod tagged;

pub use either::{Either, HeapOrHeap, InlineOrHeap, InlineOrInline};
pub use error::TypeMismatch;
pub use inject::{AtFirst, AtSecond, Index, Inject, IntoEither};
pub use kind::Kind;
pub use storage::{Erase, Heap, Inline, Storage};
pub use tagged::Tagged;

// Compile-time assertions for slot layout
const _: () = {
    use core::mem;
    use std::sync::Arc;

    assert!(mem::size_of::<Kind>() == 1);

    // Heap slots have no discriminant of their own: `None` is the null pointer.
    assert!(mem::size_of::<Option<Arc<u64>>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<HeapOrHeap<u64, String>>() == mem::size_of::<usize>() * 3);

    // An inline slot never costs more than one word over the payload itself.
    assert!(mem::size_of::<Option<u64>>() <= mem::size_of::<u64>() + mem::size_of::<usize>());
};
