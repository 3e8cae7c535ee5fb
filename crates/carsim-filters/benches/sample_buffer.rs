//! Running average filter benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use carsim_filters::prelude::*;

fn bench_average_push(c: &mut Criterion) {
    let mut filter = AverageFilter::new(180);
    let mut value = 0.0f64;

    c.bench_function("average_filter_push", |b| {
        b.iter(|| {
            value = (value + 0.5) % 180.0;
            filter.push(std::hint::black_box(value));
            std::hint::black_box(filter.average())
        })
    });
}

fn bench_int_push(c: &mut Criterion) {
    let mut filter = IntAverageFilter::new(40);
    let mut value = 0i32;

    c.bench_function("int_average_filter_push", |b| {
        b.iter(|| {
            value = (value + 17) % 65535;
            filter.push(std::hint::black_box(value));
            std::hint::black_box(filter.int_average())
        })
    });
}

fn bench_recompute(c: &mut Criterion) {
    let mut filter = AverageFilter::new(180);
    filter.fill(42.0);

    c.bench_function("average_filter_recompute", |b| {
        b.iter(|| {
            std::hint::black_box(&mut filter).recompute();
        })
    });
}

criterion_group!(benches, bench_average_push, bench_int_push, bench_recompute);

criterion_main!(benches);
