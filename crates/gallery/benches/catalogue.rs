//! Criterion benchmarks for region building and layout.
//!
//! Run: cargo bench -p gallery --bench catalogue
//!
//! Results show:
//!   build/<key>    : constructing the region tree only
//!   finalize/<key> : build + constraint solve at 350 px
//!   detail_page_all: every category wrapped in a scrolling detail page

#![allow(
    clippy::unwrap_used, // benchmark helpers use unwrap for brevity
    clippy::expect_used,
    clippy::panic,
    missing_docs,        // criterion_group! macro generates undocumented items
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gallery::prelude::*;

const WIDTH: u32 = 350;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for entry in list_categories() {
        group.bench_with_input(
            BenchmarkId::from_parameter(entry.key),
            entry,
            |b, entry| b.iter(|| build_region(black_box(entry.key.as_str()), entry.display_label)),
        );
    }
    group.finish();
}

fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize");
    for entry in list_categories() {
        group.bench_with_input(
            BenchmarkId::from_parameter(entry.key),
            entry,
            |b, entry| {
                b.iter(|| {
                    build_region(entry.key.as_str(), entry.display_label)
                        .finalize(black_box(WIDTH))
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_detail_pages(c: &mut Criterion) {
    let theme = Theme::default();
    c.bench_function("detail_page_all", |b| {
        b.iter(|| {
            for entry in list_categories() {
                let region = build_category(entry.key, entry.display_label, &theme);
                let page = DetailPage::new(entry.display_label, region, &theme).viewport(844);
                black_box(page.finalize(390).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_build, bench_finalize, bench_detail_pages);
criterion_main!(benches);
