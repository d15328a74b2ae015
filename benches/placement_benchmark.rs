//! Performance benchmarks for column placement
//!
//! Measures appending items to a board and rebuilding it at a new width.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imgboard::adapters::mock::FixedItem;
use imgboard::config::BoardConfig;
use imgboard::layout::Board;

/// Items with a repeating spread of heights
fn generate_items(count: usize) -> Vec<FixedItem> {
    (0..count)
        .map(|i| FixedItem {
            thread_id: i.to_string(),
            height: 80 + (i as u32 * 37) % 400,
            fullsize_url: None,
        })
        .collect()
}

/// Benchmark accepting items one at a time into a fixed layout
fn bench_accept(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_accept");

    for size in [25, 100, 500, 2000].iter() {
        let items = generate_items(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_items", size)),
            &items,
            |b, items| {
                b.iter(|| {
                    let mut board = Board::new(&BoardConfig::default());
                    board.apply_width(1600);
                    for item in items {
                        board.accept(item.clone());
                    }
                    black_box(board.columns().heights())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark rebuilding a populated board after the column count changes
fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_rebuild");

    for size in [100, 500, 2000].iter() {
        let mut board = Board::new(&BoardConfig::default());
        board.apply_width(1600);
        for item in generate_items(*size) {
            board.accept(item);
        }
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_function(BenchmarkId::from_parameter(format!("{}_items", size)), |b| {
            let mut wide = true;
            b.iter(|| {
                wide = !wide;
                let width = if wide { 1600 } else { 930 };
                black_box(board.apply_width(black_box(width)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_accept, bench_rebuild);
criterion_main!(benches);
