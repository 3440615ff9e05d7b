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
use spanspec_sets::{IntegerIntervals, IntervalSet, PostalRange};
use std::hint::black_box;

/// Builds a spec of `n` scattered codes and prefixes in descending order,
/// so that normalizing has to sort, merge and split.
fn scattered_postal_spec(n: usize) -> String {
    (0..n)
        .map(|i| {
            let code = 99_999 - (i * 37) % 99_000;
            if i % 5 == 0 {
                format!("{:03}", code / 100)
            } else {
                format!("{code:05}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn scattered_integer_spec(n: usize) -> String {
    (0..n as i64)
        .rev()
        .map(|i| {
            let start = i * 7;
            format!("{}-{}", start, start + 9)
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_postal_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("postal_normalize");

    for &n in &[16usize, 256, 4096] {
        let spec = scattered_postal_spec(n);
        let parsed = PostalRange::parse(&spec).unwrap();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("parse", n), &spec, |b, spec| {
            b.iter(|| PostalRange::parse(black_box(spec)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("normalize", n), &parsed, |b, parsed| {
            b.iter(|| black_box(parsed).normalize())
        });
    }
    group.finish();
}

fn bench_postal_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("postal_algebra");
    let everything = PostalRange::parse("000-999").unwrap();
    let holes = scattered_postal_spec(256);

    group.bench_function("remove_single_code", |b| {
        b.iter(|| everything.remove_spec(black_box("68501")).unwrap())
    });
    group.bench_function("remove_scattered_codes", |b| {
        b.iter(|| everything.remove_spec(black_box(&holes)).unwrap())
    });
    group.bench_function("add_spec", |b| {
        let base = PostalRange::parse("100").unwrap();
        b.iter(|| base.add_spec(black_box("00699-00901")).unwrap())
    });
    group.bench_function("at_index_last", |b| {
        let codes = PostalRange::parse(&holes).unwrap().normalize();
        let last = codes.len() - 1;
        b.iter(|| codes.at_index(black_box(last)).unwrap())
    });
    group.finish();
}

fn bench_integer_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_normalize");

    for &n in &[16usize, 256, 4096] {
        let parsed = IntegerIntervals::parse(&scattered_integer_spec(n)).unwrap();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &parsed, |b, parsed| {
            b.iter(|| black_box(parsed).normalize())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_postal_normalize,
    bench_postal_algebra,
    bench_integer_normalize
);
criterion_main!(benches);
