// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Visible set recomputation on filter changes
//! - Wraparound stepping through a filtered catalog

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gallery_lens::application::query::GalleryNavigator;
use gallery_lens::domain::gallery::{Catalog, CategoryFilter, ItemRecord, VisibleSet};
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["nature", "city", "people", "night"];

fn build_catalog(size: usize) -> Catalog {
    Catalog::from_records((0..size).map(|i| {
        ItemRecord::new(CATEGORIES[i % CATEGORIES.len()], format!("img/{i}.jpg"))
            .with_alt(format!("Photo {i}"))
    }))
}

/// Benchmark visible set recomputation for several catalog sizes.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");

    for size in [100_usize, 1_000, 10_000] {
        let catalog = build_catalog(size);
        let filter = CategoryFilter::parse("city");
        group.bench_with_input(BenchmarkId::new("compute", size), &catalog, |b, catalog| {
            b.iter(|| black_box(VisibleSet::compute(catalog, &filter)));
        });
    }

    group.finish();
}

/// Benchmark stepping once around the visible set.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_step");

    let mut navigator = GalleryNavigator::new(build_catalog(1_000));
    navigator.set_filter(CategoryFilter::parse("night"));
    let visible = navigator.visible().len();

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..visible {
                black_box(navigator.next());
            }
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..visible {
                black_box(navigator.previous());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_step);
criterion_main!(benches);
