use std::sync::Arc;
use twain::{Either, HeapOrHeap, InlineOrHeap, InlineOrInline, Kind};

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn either_send_sync_follows_payload_bounds() {
    assert_send::<InlineOrInline<u64, String>>();
    assert_sync::<InlineOrInline<u64, String>>();
    assert_send::<InlineOrHeap<u64, str>>();
    assert_sync::<InlineOrHeap<u64, str>>();
    assert_send::<HeapOrHeap<Vec<u8>, String>>();
    assert_sync::<HeapOrHeap<Vec<u8>, String>>();
}

#[test]
fn concurrent_readers_see_the_same_payload() {
    let colour = Arc::new(String::from("teal"));
    let shared: HeapOrHeap<u32, String> = Either::from_second(Arc::clone(&colour));

    crossbeam_utils::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|_| {
                for _ in 0..1000 {
                    assert_eq!(shared.kind(), Kind::Second);
                    assert!(Arc::ptr_eq(shared.as_second().unwrap(), &colour));
                    assert!(shared.as_first().is_err());
                }
            });
        }
    })
    .unwrap();

    // Every reader has released its borrow; only the test and the container hold the payload.
    assert_eq!(Arc::strong_count(&colour), 2);
}
