// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lanes_core::algorithm::cmp_indices_by_values;
use lanes_core::exception::except_handler;
use lanes_core::functional::{NotPred, ReorderPred, UnaryPredicate, equal_value};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_data(n: usize) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBE7C);
    (0..n).map(|_| rng.gen_range(0..1_000)).collect()
}

/// Finding a missing value scans the whole slice, so the adaptor overhead
/// shows up on every element.
fn bench_find_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_value");

    for n in SIZES {
        let data = random_data(n);
        let needle = 1_000u32;
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("closure", n), &data, |b, data| {
            b.iter(|| black_box(data).iter().position(|x| *x == needle))
        });

        group.bench_with_input(BenchmarkId::new("equal_value", n), &data, |b, data| {
            b.iter(|| {
                black_box(data)
                    .iter()
                    .position(equal_value(&needle).into_fn())
            })
        });
    }

    group.finish();
}

fn bench_not_pred(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_not_pred");

    for n in SIZES {
        let data = random_data(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("closure", n), &data, |b, data| {
            b.iter(|| black_box(data).iter().filter(|x| **x % 7 != 0).count())
        });

        group.bench_with_input(BenchmarkId::new("not_pred", n), &data, |b, data| {
            b.iter(|| {
                let mut p = NotPred::new(|x: &u32| *x % 7 == 0);
                black_box(data).iter().filter(|x| p.test(*x)).count()
            })
        });
    }

    group.finish();
}

/// Outward scan from the middle that keeps the smallest value, preferring the
/// position nearer the pivot on ties.
fn bench_closer_selector(c: &mut Criterion) {
    let mut group = c.benchmark_group("closer_selector");

    for n in SIZES {
        let data = random_data(n);
        let pivot = n / 2;
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("min_near_pivot", n), &data, |b, data| {
            b.iter(|| {
                let data = black_box(data);
                (0..data.len()).fold(pivot, |best, i| {
                    cmp_indices_by_values(
                        data,
                        best,
                        i,
                        ReorderPred::new(|x: &u32, y: &u32| y < x),
                        |a: usize, b: usize| a.abs_diff(pivot) < b.abs_diff(pivot),
                    )
                })
            })
        });
    }

    group.finish();
}

fn widen_sum(data: &[u32]) -> u64 {
    data.iter().map(|x| u64::from(*x)).sum()
}

fn bench_except_handler(c: &mut Criterion) {
    let data = random_data(10_000);

    c.bench_function("except_handler/sum_10000", |b| {
        b.iter(|| except_handler(|| widen_sum(black_box(&data))))
    });
}

criterion_group!(
    benches,
    bench_find_value,
    bench_not_pred,
    bench_closer_selector,
    bench_except_handler
);
criterion_main!(benches);
