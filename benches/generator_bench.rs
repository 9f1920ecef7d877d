// ABOUTME: Criterion benchmarks for recipe generation and history persistence
// ABOUTME: Measures generation latency across quantities and pool sizes, and history save cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! Criterion benchmarks for recipe generation.
//!
//! Uses a seeded ChaCha RNG so every run samples the same sequence.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smoothie_lab::{
    generator::RecipeGenerator,
    history::HistoryStore,
    ingredients::IngredientStore,
    models::{Category, CategoryMap, QuantitySettings},
    persistence::Persistence,
    storage::MemoryStore,
};

/// Ingredient pool sizes per category
const POOL_SIZES: [usize; 3] = [10, 100, 1_000];

fn store_with_pool(size: usize) -> IngredientStore {
    IngredientStore::new(CategoryMap::from_fn(|category| {
        (0..size)
            .map(|i| format!("{}-{i}", category.as_str()))
            .collect()
    }))
}

fn settings_with(count: i64) -> QuantitySettings {
    let mut settings = QuantitySettings::default();
    for category in Category::ALL {
        settings.set(category, count);
    }
    settings
}

fn bench_generate_by_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_by_quantity");
    let generator = RecipeGenerator::default();
    let store = IngredientStore::with_defaults();

    for count in 0..=5 {
        let settings = settings_with(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &settings, |b, settings| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(generator.generate(settings, &store, &mut rng)));
        });
    }
    group.finish();
}

fn bench_generate_by_pool_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_by_pool_size");
    let generator = RecipeGenerator::default();
    let settings = settings_with(5);

    for size in POOL_SIZES {
        let store = store_with_pool(size);
        group.throughput(Throughput::Elements(size as u64 * 3));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(generator.generate(&settings, store, &mut rng)));
        });
    }
    group.finish();
}

fn bench_save_full_history(c: &mut Criterion) {
    let generator = RecipeGenerator::default();
    let store = IngredientStore::with_defaults();
    let settings = QuantitySettings::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut history = HistoryStore::default();
    for _ in 0..history.capacity() {
        history.save(generator.generate(&settings, &store, &mut rng), Some(3));
    }
    let persistence = Persistence::new(Arc::new(MemoryStore::new()));

    c.bench_function("save_full_history", |b| {
        b.iter(|| persistence.save_history(black_box(&history)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_generate_by_quantity,
    bench_generate_by_pool_size,
    bench_save_full_history
);
criterion_main!(benches);
