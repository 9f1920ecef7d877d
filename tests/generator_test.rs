// ABOUTME: Integration tests for random recipe generation
// ABOUTME: Uses seeded ChaCha RNGs to check sampling, capping, and measurements deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smoothie_lab::{
    constants::RECIPE_NAMES,
    generator::RecipeGenerator,
    ingredients::IngredientStore,
    measurements::measurement_for,
    models::{Category, CategoryMap, QuantitySettings},
};

fn small_store() -> IngredientStore {
    IngredientStore::new(CategoryMap {
        fruits: vec!["バナナ".to_owned(), "キウイ".to_owned()],
        veggies: vec!["ケール".to_owned()],
        liquids: vec![],
    })
}

// ============================================================================
// Sampling Tests
// ============================================================================

#[test]
fn test_two_fruits_from_defaults_are_distinct_with_measurements() {
    let generator = RecipeGenerator::default();
    let store = IngredientStore::with_defaults();
    let settings = QuantitySettings::default();

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let recipe = generator.generate(&settings, &store, &mut rng);

        let fruits = &recipe.ingredients.fruits;
        assert_eq!(fruits.len(), 2);
        assert_ne!(fruits[0].name, fruits[1].name);
        for fruit in fruits {
            assert!(store.contains(Category::Fruits, &fruit.name));
            assert!(!fruit.measurement.is_empty());
        }
        assert_eq!(recipe.ingredients.veggies.len(), 1);
        assert_eq!(recipe.ingredients.liquids.len(), 1);
    }
}

#[test]
fn test_quantity_capped_at_available() {
    let mut settings = QuantitySettings::default();
    settings.set(Category::Fruits, 5);
    settings.set(Category::Veggies, 5);
    settings.set(Category::Liquids, 5);

    let recipe = RecipeGenerator::default().generate(
        &settings,
        &small_store(),
        &mut ChaCha8Rng::seed_from_u64(9),
    );

    let fruit_names: HashSet<_> = recipe
        .ingredients
        .fruits
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect();
    assert_eq!(fruit_names, HashSet::from(["バナナ", "キウイ"]));
    assert_eq!(recipe.ingredients.veggies.len(), 1);
    assert!(recipe.ingredients.liquids.is_empty());
    assert_eq!(recipe.ingredient_count(), 3);
}

#[test]
fn test_five_of_each_never_repeats() {
    let mut settings = QuantitySettings::default();
    for category in Category::ALL {
        settings.set(category, 5);
    }
    let generator = RecipeGenerator::default();
    let store = IngredientStore::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(1234);

    for _ in 0..20 {
        let recipe = generator.generate(&settings, &store, &mut rng);
        for (_, ingredients) in recipe.ingredients.iter() {
            let unique: HashSet<_> = ingredients.iter().map(|i| &i.name).collect();
            assert_eq!(unique.len(), ingredients.len());
            assert_eq!(ingredients.len(), 5);
        }
    }
}

// ============================================================================
// Determinism and Naming Tests
// ============================================================================

#[test]
fn test_same_seed_same_selection() {
    let generator = RecipeGenerator::default();
    let store = IngredientStore::with_defaults();
    let settings = QuantitySettings::default();

    let first = generator.generate(&settings, &store, &mut ChaCha8Rng::seed_from_u64(77));
    let second = generator.generate(&settings, &store, &mut ChaCha8Rng::seed_from_u64(77));

    assert_eq!(first.name, second.name);
    assert_eq!(first.ingredients, second.ingredients);
}

#[test]
fn test_names_come_from_builtin_pool() {
    let generator = RecipeGenerator::default();
    let store = IngredientStore::with_defaults();
    let settings = QuantitySettings::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..30 {
        let recipe = generator.generate(&settings, &store, &mut rng);
        assert!(RECIPE_NAMES.contains(&recipe.name.as_str()));
    }
}

#[test]
fn test_measurements_follow_table() {
    let mut settings = QuantitySettings::default();
    settings.set(Category::Fruits, 0);
    settings.set(Category::Liquids, 0);
    let store = IngredientStore::new(CategoryMap {
        veggies: vec!["しょうが".to_owned()],
        ..CategoryMap::default()
    });

    let recipe =
        RecipeGenerator::default().generate(&settings, &store, &mut ChaCha8Rng::seed_from_u64(0));
    assert_eq!(recipe.ingredients.veggies[0].measurement, "10g");
    assert_eq!(measurement_for(Category::Veggies, "しょうが"), "10g");
}

#[test]
fn test_custom_ingredient_uses_category_default() {
    let mut settings = QuantitySettings::default();
    settings.set(Category::Fruits, 0);
    settings.set(Category::Veggies, 0);
    let store = IngredientStore::new(CategoryMap {
        liquids: vec!["ライスミルク".to_owned()],
        ..CategoryMap::default()
    });

    let recipe =
        RecipeGenerator::default().generate(&settings, &store, &mut ChaCha8Rng::seed_from_u64(0));
    assert_eq!(recipe.ingredients.liquids[0].measurement, "200ml");
}

#[test]
fn test_single_name_pool() {
    let generator = RecipeGenerator::with_names(vec!["テスト".to_owned()]).unwrap();
    let recipe = generator.generate(
        &QuantitySettings::default(),
        &IngredientStore::with_defaults(),
        &mut ChaCha8Rng::seed_from_u64(3),
    );
    assert_eq!(recipe.name, "テスト");
}
