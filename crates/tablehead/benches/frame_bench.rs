//! Benchmarks for frame derivation and resize updates.
//!
//! Run with: cargo bench -p tablehead

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tablehead::{ColumnDef, DataTable};

struct Item {
    name: String,
    value: u64,
}

fn sample(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            name: format!("item-{i}"),
            value: (i as u64) * 7,
        })
        .collect()
}

fn build_table() -> DataTable<Item> {
    let columns = vec![
        ColumnDef::new("name", |i: &Item| i.name.clone()).header("Name"),
        ColumnDef::new("value", |i: &Item| i.value.to_string()).header("Value"),
    ];
    DataTable::new(columns, |checked: bool| {
        if checked { "[x]" } else { "[ ]" }.to_string()
    })
    .page_size(50)
}

fn bench_frame_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/frame");

    for n in [10usize, 100, 1_000, 10_000] {
        let data = sample(n);
        let table = build_table();

        group.bench_with_input(BenchmarkId::from_parameter(n), &(), |b, _| {
            b.iter(|| {
                let frame = table.frame(&data);
                black_box(frame.rows.len());
            })
        });
    }

    group.finish();
}

fn bench_resize_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/resize");

    group.bench_function("update_stream", |b| {
        let mut table = build_table();
        table.begin_resize("name", 0.0);
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 3.0) % 400.0;
            black_box(table.update_resize(x));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_frame_derivation, bench_resize_updates);
criterion_main!(benches);
