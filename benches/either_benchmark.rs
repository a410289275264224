use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::any::Any;
use std::sync::Arc;
use twain::{Either, HeapOrHeap, InlineOrInline, Kind};

enum Plain {
    Number(u64),
    Ratio(f64),
}

#[allow(clippy::cast_precision_loss)]
fn bench_narrowing(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrowing");

    let values: Vec<InlineOrInline<u64, f64>> = (0..1024u64)
        .map(|i| {
            if i % 2 == 0 {
                Either::from_first(i)
            } else {
                Either::from_second(i as f64)
            }
        })
        .collect();

    group.bench_function("inline_or_inline_check_then_extract", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in &values {
                if v.kind() == Kind::First {
                    sum = sum.wrapping_add(*v.as_first().unwrap_or(&0));
                }
            }
            black_box(sum)
        });
    });

    group.bench_function("inline_or_inline_try_extract", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in &values {
                if let Ok(n) = v.as_first() {
                    sum = sum.wrapping_add(*n);
                }
            }
            black_box(sum)
        });
    });

    // Baseline: a hand-written enum
    let plain: Vec<Plain> = (0..1024u64)
        .map(|i| {
            if i % 2 == 0 {
                Plain::Number(i)
            } else {
                Plain::Ratio(i as f64)
            }
        })
        .collect();

    group.bench_function("plain_enum_match", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in &plain {
                if let Plain::Number(n) = v {
                    sum = sum.wrapping_add(*n);
                }
            }
            black_box(sum)
        });
    });

    // Baseline: runtime type inspection
    let erased: Vec<Box<dyn Any>> = (0..1024u64)
        .map(|i| -> Box<dyn Any> {
            if i % 2 == 0 {
                Box::new(i)
            } else {
                Box::new(i as f64)
            }
        })
        .collect();

    group.bench_function("box_dyn_any_downcast", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in &erased {
                if let Some(n) = v.downcast_ref::<u64>() {
                    sum = sum.wrapping_add(*n);
                }
            }
            black_box(sum)
        });
    });

    group.finish();
}

#[allow(deprecated)]
fn bench_erased_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("erased_access");

    let shared: HeapOrHeap<String, Vec<u8>> = Either::from_first_value(String::from("payload"));
    group.bench_function("heap_or_heap_data", |b| {
        b.iter(|| black_box(shared.data()));
    });

    let inline: InlineOrInline<u64, f64> = Either::from_first(7);
    group.bench_function("inline_or_inline_data", |b| {
        b.iter(|| black_box(inline.data()));
    });

    let arc = Arc::new(String::from("payload"));
    group.bench_function("arc_clone_baseline", |b| {
        b.iter(|| black_box(Arc::clone(&arc)));
    });

    group.finish();
}

criterion_group!(benches, bench_narrowing, bench_erased_access);
criterion_main!(benches);
