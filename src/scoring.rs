// ABOUTME: Weighted composite healthfulness scoring for single ingredients and meals
// ABOUTME: IngredientScorer computes rate() and rate_meal() verdicts from a weight table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Ingredient scoring
//!
//! The composite score is an additive weighted sum over the configured
//! nutrient weight table, with no normalization against a maximum possible
//! score. Missing nutrients contribute zero, and an unknown ingredient
//! scores a neutral 0.0 rather than erroring.

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::models::NutrientTable;

/// Verdict band for an average meal score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealVerdict {
    /// Average score above the great threshold
    Great,
    /// Average score above the so-so threshold
    SoSo,
    /// Everything else
    Bad,
}

/// Per-ingredient scores and aggregate verdict for a set of ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRating {
    /// (name, composite score) per requested ingredient, in request order
    pub scores: Vec<(String, f64)>,
    /// Mean of the per-ingredient scores
    pub average: f64,
    /// Verdict band for the average
    pub verdict: MealVerdict,
}

/// Computes composite healthfulness scores against a nutrient table
pub struct IngredientScorer<'a> {
    table: &'a NutrientTable,
    config: ScoringConfig,
}

impl<'a> IngredientScorer<'a> {
    /// Create a scorer with the default weight table
    #[must_use]
    pub fn new(table: &'a NutrientTable) -> Self {
        Self::with_config(table, ScoringConfig::default())
    }

    /// Create a scorer with an explicit weight configuration
    #[must_use]
    pub const fn with_config(table: &'a NutrientTable, config: ScoringConfig) -> Self {
        Self { table, config }
    }

    /// Composite score for one ingredient, rounded to 2 decimal places
    ///
    /// Unknown ingredients score 0.0 by design: a lookup miss is a neutral
    /// score in single-ingredient flows, not an error.
    #[must_use]
    pub fn rate(&self, name: &str) -> f64 {
        let Some(record) = self.table.find(name) else {
            return 0.0;
        };
        let mut score = 0.0;
        for (nutrient, weight) in &self.config.weights {
            let wanted = nutrient.to_lowercase();
            let value = self
                .table
                .nutrient_names()
                .iter()
                .position(|column| column.to_lowercase() == wanted)
                .map_or(0.0, |index| record.nutrient_or_zero(index));
            score += value * weight;
        }
        (score * 100.0).round() / 100.0
    }

    /// Score a set of ingredients and band the average
    #[must_use]
    pub fn rate_meal(&self, names: &[&str]) -> MealRating {
        let scores: Vec<(String, f64)> = names
            .iter()
            .map(|name| (name.trim().to_lowercase(), self.rate(name)))
            .collect();
        let total: f64 = scores.iter().map(|(_, score)| score).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = if scores.is_empty() {
            0.0
        } else {
            total / scores.len() as f64
        };
        let verdict = if average > self.config.great_threshold {
            MealVerdict::Great
        } else if average > self.config.soso_threshold {
            MealVerdict::SoSo
        } else {
            MealVerdict::Bad
        };
        MealRating {
            scores,
            average: (average * 100.0).round() / 100.0,
            verdict,
        }
    }
}
