// ABOUTME: Tests for menu generation with an injected, seedable random source
// ABOUTME: Covers slot structure, pool membership, determinism, and plan enrichment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

mod common;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nutrisage::{
    AdvisorError, IngredientScorer, MealSlot, MenuConfig, MenuGenerator, RecipeMatcher,
    ScoringConfig, SlotPlan, TableAnalyzer,
};

#[test]
fn menu_has_three_slots_of_three_picks() {
    let table = common::sample_table();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let menu = MenuGenerator::new(&table)
        .generate(&mut rng)
        .expect("generates");

    let slots: Vec<MealSlot> = menu.slots.iter().map(|s| s.slot).collect();
    assert_eq!(
        slots,
        vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
    );
    for slot in &menu.slots {
        assert_eq!(slot.picks.len(), 3);
    }
}

#[test]
fn picks_come_from_their_nutrient_pools() {
    let table = common::sample_table();
    let config = MenuConfig::default();
    let analyzer = TableAnalyzer::new(&table);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let menu = MenuGenerator::with_config(&table, config.clone())
        .generate(&mut rng)
        .expect("generates");

    for (slot, plan) in menu.slots.iter().zip(&config.slots) {
        for (pick, priority) in slot.picks.iter().zip(&plan.priorities) {
            let pool = analyzer
                .top_by_nutrient(priority, config.pool_size)
                .expect("pool resolves");
            assert!(
                pool.iter().any(|entry| &entry.name == pick),
                "{pick} not in the {priority} pool"
            );
        }
    }
}

#[test]
fn same_seed_reproduces_the_menu() {
    let table = common::sample_table();
    let generator = MenuGenerator::new(&table);

    let mut first_rng = ChaCha8Rng::seed_from_u64(1234);
    let mut second_rng = ChaCha8Rng::seed_from_u64(1234);
    let first = generator.generate(&mut first_rng).expect("generates");
    let second = generator.generate(&mut second_rng).expect("generates");

    for (a, b) in first.slots.iter().zip(&second.slots) {
        assert_eq!(a.picks, b.picks);
    }
}

#[test]
fn unknown_priority_nutrient_is_a_schema_error() {
    let table = common::sample_table();
    let config = MenuConfig {
        pool_size: 20,
        slots: vec![SlotPlan {
            slot: MealSlot::Breakfast,
            priorities: vec!["caffeine".to_owned()],
        }],
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = MenuGenerator::with_config(&table, config).generate(&mut rng);
    assert!(matches!(result, Err(AdvisorError::Schema { .. })));
}

#[test]
fn plan_scores_picks_and_attaches_recipes() {
    let table = common::sample_table();
    let recipes = common::sample_recipes();
    let matcher = RecipeMatcher::new(&recipes);
    let scoring = ScoringConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let plan = MenuGenerator::new(&table)
        .plan(&mut rng, &scoring, &matcher, 3)
        .expect("plans");

    assert_eq!(plan.slots.len(), 3);
    let scorer = IngredientScorer::with_config(&table, scoring);
    for meal in &plan.slots {
        assert_eq!(meal.picks.len(), 3);
        for pick in &meal.picks {
            assert_eq!(pick.score, scorer.rate(&pick.name));
        }
        assert!(meal.recipes.len() <= 3);
    }
}
