// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds small nutrient tables and recipe sets without touching the filesystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project
#![allow(dead_code)]

use nutrisage::models::{IngredientRecord, NutrientTable, Recipe};

/// Standard nutrient columns used by the fixtures, in table order
pub const COLUMNS: [&str; 5] = [
    "Protein",
    "Fiber, total dietary",
    "Vitamin A, RAE",
    "Calcium, Ca",
    "Iron, Fe",
];

/// Build a record with values aligned to [`COLUMNS`]
pub fn record(name: &str, cluster: Option<u32>, values: [Option<f64>; 5]) -> IngredientRecord {
    IngredientRecord {
        name: name.to_owned(),
        cluster,
        nutrients: values.to_vec(),
    }
}

/// A small table covering all fixture columns
///
/// Values are %DV. Spinach leads on vitamin A and iron, yogurt on
/// calcium, lentils on protein and fiber.
pub fn sample_table() -> NutrientTable {
    let columns = COLUMNS.iter().map(|&c| c.to_owned()).collect();
    let records = vec![
        record(
            "Spinach",
            Some(0),
            [
                Some(6.0),
                Some(9.0),
                Some(52.0),
                Some(10.0),
                Some(15.0),
            ],
        ),
        record(
            "Lentils",
            Some(1),
            [
                Some(36.0),
                Some(31.0),
                Some(0.0),
                Some(4.0),
                Some(37.0),
            ],
        ),
        record(
            "Yogurt",
            Some(2),
            [Some(20.0), Some(0.0), Some(2.0), Some(45.0), Some(1.0)],
        ),
        record(
            "Salmon",
            Some(1),
            [Some(40.0), Some(0.0), Some(1.0), Some(1.0), Some(3.0)],
        ),
        record(
            "Carrot",
            Some(0),
            [Some(2.0), Some(8.0), Some(104.0), Some(3.0), Some(2.0)],
        ),
        record(
            "Oats",
            Some(1),
            [Some(26.0), Some(40.0), None, Some(5.0), Some(26.0)],
        ),
        record(
            "Kale",
            Some(0),
            [Some(6.0), Some(7.0), Some(30.0), Some(15.0), Some(6.0)],
        ),
        record("Honey", None, [Some(1.0), Some(0.0), None, None, Some(1.0)]),
    ];
    NutrientTable::new(columns, records).expect("fixture table is consistent")
}

fn recipe(title: &str, ingredients: &[&str], rating: f64, url: &str) -> Recipe {
    Recipe {
        title: title.to_owned(),
        ingredients: ingredients.iter().map(|&i| i.to_owned()).collect(),
        rating,
        url: url.to_owned(),
    }
}

/// Recipes exercising substring matching, ties, and the eggplant false
/// positive
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "Garlic Butter Salmon",
            &["1 lb salmon fillet", "3 garlic cloves, minced", "2 tbsp butter"],
            4.5,
            "https://example.com/garlic-salmon",
        ),
        recipe(
            "Lentil Soup",
            &["1 cup lentils", "1 carrot, diced", "2 garlic cloves"],
            4.0,
            "https://example.com/lentil-soup",
        ),
        recipe(
            "Eggplant Parmesan",
            &["1 large eggplant", "2 cups marinara", "parmesan"],
            3.8,
            "https://example.com/eggplant-parm",
        ),
        recipe(
            "Fruit Salad",
            &["2 apples", "1 banana", "handful of grapes"],
            3.5,
            "https://example.com/fruit-salad",
        ),
        recipe(
            "Kale Caesar",
            &["1 bunch kale", "croutons", "caesar dressing"],
            4.2,
            "https://example.com/kale-caesar",
        ),
    ]
}
