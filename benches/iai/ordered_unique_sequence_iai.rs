//! IAI-Callgrind benchmark for OrderedUniqueSequence construction.
//!
//! Measures instruction counts for bulk construction vs incremental add.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use ordseq::sequence::OrderedUniqueSequence;
use std::hint::black_box;

fn setup_scrambled_vec(size: i32) -> Vec<i32> {
    (0..size)
        .map(|index| (index * 7919) % size)
        .chain(0..size / 2)
        .collect()
}

#[library_benchmark]
#[bench::small(setup_scrambled_vec(100))]
#[bench::medium(setup_scrambled_vec(1000))]
#[bench::large(setup_scrambled_vec(10000))]
fn from_vec(elements: Vec<i32>) -> OrderedUniqueSequence<i32> {
    black_box(OrderedUniqueSequence::from_vec(black_box(elements)))
}

#[library_benchmark]
#[bench::small(setup_scrambled_vec(100))]
#[bench::medium(setup_scrambled_vec(1000))]
#[bench::large(setup_scrambled_vec(10000))]
fn incremental_add(elements: Vec<i32>) -> OrderedUniqueSequence<i32> {
    let mut sequence = OrderedUniqueSequence::new();
    for element in black_box(elements) {
        sequence.add(black_box(element));
    }
    black_box(sequence)
}

library_benchmark_group!(
    name = ordered_unique_sequence_construction_group;
    benchmarks = from_vec, incremental_add
);

main!(library_benchmark_groups = ordered_unique_sequence_construction_group);
