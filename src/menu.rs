// ABOUTME: Daily menu generation from nutrient-priority sampling pools
// ABOUTME: MenuGenerator samples top-ranked ingredients per slot with an injected RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Menu generation
//!
//! Each meal slot has three fixed nutrient priorities. For every
//! slot-nutrient pair the generator ranks the table by that nutrient,
//! keeps the top pool (20 by default), and picks one ingredient uniformly
//! at random. The random source is injected by the caller: production
//! uses `thread_rng`, tests a seeded generator. Picks across different
//! pools may repeat; that is permitted.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::TableAnalyzer;
use crate::config::{MealSlot, MenuConfig, ScoringConfig};
use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::NutrientTable;
use crate::recipes::{RecipeMatch, RecipeMatcher};
use crate::scoring::IngredientScorer;

/// One generated meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedSlot {
    /// Which meal this is
    pub slot: MealSlot,
    /// One pick per nutrient priority, in priority order
    pub picks: Vec<String>,
}

/// A generated daily menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Slots in serving order
    pub slots: Vec<PlannedSlot>,
}

/// A menu pick with its composite score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPick {
    /// Ingredient name
    pub name: String,
    /// Composite healthfulness score
    pub score: f64,
}

/// A menu slot enriched with scores and recipe suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Which meal this is
    pub slot: MealSlot,
    /// Scored picks in priority order
    pub picks: Vec<ScoredPick>,
    /// Top recipe matches for the slot's picks
    pub recipes: Vec<RecipeMatch>,
}

/// A full menu plan: picks, scores, and recipe suggestions per slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPlan {
    /// Slots in serving order
    pub slots: Vec<PlannedMeal>,
}

/// Generates daily menus from nutrient-priority pools
pub struct MenuGenerator<'a> {
    table: &'a NutrientTable,
    config: MenuConfig,
}

impl<'a> MenuGenerator<'a> {
    /// Create a generator with the default slot plans
    #[must_use]
    pub fn new(table: &'a NutrientTable) -> Self {
        Self::with_config(table, MenuConfig::default())
    }

    /// Create a generator with an explicit configuration
    #[must_use]
    pub const fn with_config(table: &'a NutrientTable, config: MenuConfig) -> Self {
        Self { table, config }
    }

    /// Generate one menu, sampling from the given random source
    ///
    /// # Errors
    /// Returns a schema error when a priority resolves to no column or
    /// its pool has no ingredients with recorded values.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> AdvisorResult<Menu> {
        let analyzer = TableAnalyzer::new(self.table);
        let mut slots = Vec::with_capacity(self.config.slots.len());
        for plan in &self.config.slots {
            let mut picks = Vec::with_capacity(plan.priorities.len());
            for priority in &plan.priorities {
                let pool = analyzer.top_by_nutrient(priority, self.config.pool_size)?;
                let pick = pool
                    .choose(rng)
                    .ok_or_else(|| AdvisorError::Schema {
                        entity: "menu pool",
                        reason: format!("no ingredients with recorded values for '{priority}'"),
                    })?;
                picks.push(pick.name.clone());
            }
            slots.push(PlannedSlot {
                slot: plan.slot,
                picks,
            });
        }
        Ok(Menu { slots })
    }

    /// Generate a menu and enrich each slot with scores and recipe
    /// suggestions
    ///
    /// # Errors
    /// Propagates the same schema errors as [`Self::generate`].
    pub fn plan<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        scoring: &ScoringConfig,
        matcher: &RecipeMatcher<'_>,
        recipes_per_slot: usize,
    ) -> AdvisorResult<MenuPlan> {
        let menu = self.generate(rng)?;
        let scorer = IngredientScorer::with_config(self.table, scoring.clone());
        let slots = menu
            .slots
            .into_iter()
            .map(|slot| {
                let picks: Vec<ScoredPick> = slot
                    .picks
                    .iter()
                    .map(|name| ScoredPick {
                        name: name.clone(),
                        score: scorer.rate(name),
                    })
                    .collect();
                let names: Vec<&str> = slot.picks.iter().map(String::as_str).collect();
                let recipes = matcher.find_similar(&names, recipes_per_slot);
                PlannedMeal {
                    slot: slot.slot,
                    picks,
                    recipes,
                }
            })
            .collect();
        Ok(MenuPlan { slots })
    }
}
