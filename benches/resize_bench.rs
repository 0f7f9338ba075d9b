use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsframe::{Column, Resizer, Table, Transformer};

fn create_test_table(rows: usize, cell_len: usize) -> Table {
    let mut table = Table::new();
    for c in 0..4 {
        let cells: Vec<Vec<f64>> = (0..rows)
            .map(|r| {
                (0..cell_len)
                    .map(|i| ((r + c) as f64 * 0.1 + i as f64).sin())
                    .collect()
            })
            .collect();
        table
            .add_column(Column::new(format!("dim_{}", c), cells))
            .unwrap();
    }
    table
}

fn benchmark_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_transform");

    for &rows in &[100usize, 1000] {
        let table = create_test_table(rows, 128);
        let resizer = Resizer::new(256).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", rows), &table, |b, t| {
            b.iter(|| resizer.transform(black_box(t), None).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", rows), &table, |b, t| {
            b.iter(|| resizer.par_transform(black_box(t)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_resize);
criterion_main!(benches);
