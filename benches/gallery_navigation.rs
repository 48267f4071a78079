// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery filtering and lightbox navigation.
//!
//! Measures the pure controller work without any widget or network cost.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::{
    CatalogOrigin, CategoryFilter, GalleryController, ImageId, ImageSource,
};
use std::hint::black_box;

fn loaded() -> GalleryController {
    let mut gallery = GalleryController::new(ImageSource::default());
    gallery
        .load_catalog(&CatalogOrigin::Builtin)
        .expect("builtin catalog loads");
    gallery
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("load_builtin_catalog", |b| {
        b.iter(|| black_box(loaded().filtered_len()));
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let mut gallery = loaded();
    let keys = ["nature", "city", "people", "animals", "all"];

    group.bench_function("filter_cycle", |b| {
        b.iter(|| {
            for key in keys {
                gallery.filter(CategoryFilter::from_key(black_box(key)));
            }
            black_box(gallery.filtered_len());
        });
    });

    group.bench_function("tiles", |b| {
        b.iter(|| black_box(gallery.tiles().filter(|tile| tile.is_visible()).count()));
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let mut gallery = loaded();
    gallery.open_viewer(ImageId(1015));

    group.bench_function("next_with_lightbox", |b| {
        b.iter(|| {
            gallery.next();
            black_box(gallery.lightbox().map(|view| view.position));
        });
    });

    group.bench_function("previous_with_lightbox", |b| {
        b.iter(|| {
            gallery.previous();
            black_box(gallery.lightbox().map(|view| view.position));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_filter, bench_navigate);
criterion_main!(benches);
