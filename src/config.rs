// ABOUTME: Configuration for ingredient scoring weights and menu generation
// ABOUTME: ScoringConfig nutrient weight table and MenuConfig slot priorities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Scoring and menu configuration
//!
//! Weights and slot priorities are explicit configuration values passed to
//! the scorer and menu generator at construction, so tests can substitute
//! alternate schemes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ingredient scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Nutrient column name → positive weight for the composite score
    pub weights: BTreeMap<String, f64>,
    /// Average meal score above this is rated great
    pub great_threshold: f64,
    /// Average meal score above this (but below great) is rated so-so
    pub soso_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert("Protein".to_owned(), 3.0);
        weights.insert("Fiber, total dietary".to_owned(), 2.0);
        weights.insert("Vitamin A, RAE".to_owned(), 1.0);
        weights.insert("Calcium, Ca".to_owned(), 1.0);
        weights.insert("Iron, Fe".to_owned(), 1.0);
        Self {
            weights,
            great_threshold: 150.0,
            soso_threshold: 75.0,
        }
    }
}

/// One meal slot of the daily menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
}

impl MealSlot {
    /// Display name for the slot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

/// Nutrient priorities for one meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPlan {
    /// Which meal this plan fills
    pub slot: MealSlot,
    /// Nutrient column queries, one sampling pool per entry
    pub priorities: Vec<String>,
}

/// Menu generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Number of top-ranked ingredients forming each sampling pool
    pub pool_size: usize,
    /// Slot plans in serving order
    pub slots: Vec<SlotPlan>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let plan = |slot, priorities: [&str; 3]| SlotPlan {
            slot,
            priorities: priorities.iter().map(|&p| p.to_owned()).collect(),
        };
        Self {
            pool_size: 20,
            slots: vec![
                plan(
                    MealSlot::Breakfast,
                    ["Fiber, total dietary", "Calcium, Ca", "Vitamin A, RAE"],
                ),
                plan(
                    MealSlot::Lunch,
                    ["Protein", "Iron, Fe", "Fiber, total dietary"],
                ),
                plan(
                    MealSlot::Dinner,
                    ["Protein", "Vitamin A, RAE", "Calcium, Ca"],
                ),
            ],
        }
    }
}
