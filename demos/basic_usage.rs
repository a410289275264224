//! Basic either usage example

use std::sync::Arc;
use twain::{Either, HeapOrHeap, InlineOrHeap, InlineOrInline, IntoEither, Kind};

#[derive(Debug)]
struct Shape {
    sides: u32,
}

#[derive(Debug)]
struct Color {
    name: &'static str,
}

fn main() {
    println!("Either Basic Usage Example");
    println!("==========================");

    // Inline payloads on both sides
    let answer: InlineOrInline<i32, String> = 42_i32.into_either();
    let label: InlineOrInline<i32, String> = Either::from_second("x".to_string());

    for value in [&answer, &label] {
        match value.kind() {
            Kind::First => println!("  number: {}", value.as_first().copied().unwrap_or_default()),
            Kind::Second => println!("  label: {:?}", value.as_second()),
        }
    }

    // Extraction against the wrong side is an error, never a default
    if let Err(err) = answer.as_second() {
        println!("  {err}");
    }

    // Inline first side, shared second side
    let mixed: InlineOrHeap<u8, str> = Either::from_second(Arc::from("shared text"));
    println!("\nInlineOrHeap: {mixed:?}");

    // Shared payloads on both sides: type-erased access without a copy
    let red = Arc::new(Color { name: "red" });
    let paint: HeapOrHeap<Shape, Color> = Either::from_second(Arc::clone(&red));
    let erased = paint.data();
    if let Some(color) = erased.downcast_ref::<Color>() {
        println!("\nHeapOrHeap erased payload: {}", color.name);
    }
    println!("  same allocation: {}", Arc::ptr_eq(paint.as_second().unwrap_or(&red), &red));

    let square: HeapOrHeap<Shape, Color> = Either::from_first_value(Shape { sides: 4 });
    println!("  {square:?} has {} sides", square.as_first().map_or(0, |s| s.sides));
}
