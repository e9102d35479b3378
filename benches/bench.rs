use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rb_ordered_set::OrderedSet;
use std::hint::black_box;

struct ValueGenerator {
    rng: StdRng,
    limit: u32,
}
impl ValueGenerator {
    fn new() -> Self {
        const LIMIT: u32 = 1_000_000;
        Self {
            rng: StdRng::from_seed([0; 32]),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> u32 {
        self.rng.gen_range(0..self.limit)
    }

    fn next_range(&mut self) -> (u32, u32) {
        let low = self.rng.gen_range(0..self.limit - 1);
        let high = self.rng.gen_range(low + 1..self.limit);
        (low, high)
    }
}

// insert helper fn
fn ordered_set_insert(count: usize, bench: &mut Bencher) {
    let mut gen = ValueGenerator::new();
    let values: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut set = OrderedSet::new();
        for v in values.clone() {
            black_box(set.insert(v));
        }
    });
}

// insert and remove helper fn
fn ordered_set_insert_remove(count: usize, bench: &mut Bencher) {
    let mut gen = ValueGenerator::new();
    let values: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut set = OrderedSet::new();
        for v in values.clone() {
            black_box(set.insert(v));
        }
        for v in &values {
            black_box(set.remove(v));
        }
    });
}

fn bench_ordered_set_insert(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_insert_100", |b| {
        ordered_set_insert(100, b)
    });
    c.bench_function("bench_ordered_set_insert_1000", |b| {
        ordered_set_insert(1000, b)
    });
    c.bench_function("bench_ordered_set_insert_10,000", |b| {
        ordered_set_insert(10_000, b)
    });
    c.bench_function("bench_ordered_set_insert_100,000", |b| {
        ordered_set_insert(100_000, b)
    });
}

fn bench_ordered_set_insert_remove(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_insert_remove_100", |b| {
        ordered_set_insert_remove(100, b)
    });
    c.bench_function("bench_ordered_set_insert_remove_1000", |b| {
        ordered_set_insert_remove(1000, b)
    });
    c.bench_function("bench_ordered_set_insert_remove_10,000", |b| {
        ordered_set_insert_remove(10_000, b)
    });
    c.bench_function("bench_ordered_set_insert_remove_100,000", |b| {
        ordered_set_insert_remove(100_000, b)
    });
}

// range helper fn
fn ordered_set_range(count: usize, bench: &mut Bencher) {
    let mut gen = ValueGenerator::new();
    let values: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let ranges: Vec<_> = std::iter::repeat_with(|| gen.next_range())
        .take(count)
        .collect();
    let mut set = OrderedSet::new();
    for v in values {
        set.insert(v);
    }
    bench.iter(|| {
        for &(low, high) in &ranges {
            black_box(set.range(low..high).collect::<Vec<_>>());
        }
    });
}

// iter().filter() helper fn
fn ordered_set_iter_filter(count: usize, bench: &mut Bencher) {
    let mut gen = ValueGenerator::new();
    let values: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let ranges: Vec<_> = std::iter::repeat_with(|| gen.next_range())
        .take(count)
        .collect();
    let mut set = OrderedSet::new();
    for v in values {
        set.insert(v);
    }
    bench.iter(|| {
        for &(low, high) in &ranges {
            black_box(
                set.iter()
                    .filter(|&&v| v >= low && v < high)
                    .collect::<Vec<_>>(),
            );
        }
    });
}

fn bench_ordered_set_range(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_range_100", |b| ordered_set_range(100, b));
    c.bench_function("bench_ordered_set_range_1000", |b| {
        ordered_set_range(1000, b)
    });
}

fn bench_ordered_set_iter_filter(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_iter_filter_100", |b| {
        ordered_set_iter_filter(100, b)
    });
    c.bench_function("bench_ordered_set_iter_filter_1000", |b| {
        ordered_set_iter_filter(1000, b)
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_ordered_set_insert, bench_ordered_set_insert_remove,
}

criterion_group! {
    name = benches_iter;
    config = criterion_config();
    targets = bench_ordered_set_range, bench_ordered_set_iter_filter
}

criterion_main!(benches_basic_op, benches_iter);
