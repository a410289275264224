#![cfg(feature = "tracing")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::span;
use tracing::{Event, Level, Metadata, Subscriber};
use twain::{Either, InlineOrInline};

/// Counts trace-level events emitted from the either module.
struct NarrowingEvents(Arc<AtomicUsize>);

impl Subscriber for NarrowingEvents {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let meta = event.metadata();
        if *meta.level() == Level::TRACE && meta.target() == "twain::either" {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &span::Id) {}

    fn exit(&self, _: &span::Id) {}
}

#[test]
fn failed_narrowing_emits_one_event_each() {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = NarrowingEvents(Arc::clone(&count));

    tracing::subscriber::with_default(subscriber, || {
        let e: InlineOrInline<i32, String> = Either::from_first(42);
        assert!(e.as_second().is_err());
        assert!(e.clone().into_second().is_err());
    });

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn successful_narrowing_is_silent() {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = NarrowingEvents(Arc::clone(&count));

    tracing::subscriber::with_default(subscriber, || {
        let e: InlineOrInline<i32, String> = Either::from_second("x".to_string());
        assert_eq!(e.kind(), twain::Kind::Second);
        assert!(e.as_second().is_ok());
        assert!(e.second().is_some());
    });

    assert_eq!(count.load(Ordering::SeqCst), 0);
}
