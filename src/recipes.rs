// ABOUTME: Recipe matching by ingredient-overlap substring scoring
// ABOUTME: RecipeMatcher ranks recipes against a candidate ingredient set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Recipe matching
//!
//! A recipe's match score is the count of query ingredients that appear
//! as a substring of any line in its ingredient list. Substring matching
//! is deliberate and carries its known false positives ("egg" matches
//! "eggplant"); exact matching would miss "garlic" inside "2 garlic
//! cloves, minced".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Recipe;

/// A recipe together with its ingredient-overlap score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMatch {
    /// The matched recipe
    pub recipe: Recipe,
    /// Number of query ingredients found in the recipe's ingredient list
    pub matches: usize,
}

/// Scores loaded recipes against candidate ingredient sets
pub struct RecipeMatcher<'a> {
    recipes: &'a [Recipe],
}

impl<'a> RecipeMatcher<'a> {
    /// Create a matcher over loaded recipes
    #[must_use]
    pub const fn new(recipes: &'a [Recipe]) -> Self {
        Self { recipes }
    }

    /// Top `top_n` recipes by ingredient overlap, descending
    ///
    /// Matching is case-insensitive substring containment per query
    /// ingredient. Recipes with no overlap are excluded; ties keep the
    /// source recipe order (stable sort).
    #[must_use]
    pub fn find_similar(&self, ingredients: &[&str], top_n: usize) -> Vec<RecipeMatch> {
        let queries: Vec<String> = ingredients
            .iter()
            .map(|name| name.trim().to_lowercase())
            .collect();

        let mut scored: Vec<RecipeMatch> = self
            .recipes
            .iter()
            .filter_map(|recipe| {
                let matches = queries
                    .iter()
                    .filter(|query| {
                        recipe
                            .ingredients
                            .iter()
                            .any(|line| line.to_lowercase().contains(query.as_str()))
                    })
                    .count();
                (matches > 0).then(|| RecipeMatch {
                    recipe: recipe.clone(),
                    matches,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.matches.cmp(&a.matches));
        scored.truncate(top_n);
        debug!(
            candidates = self.recipes.len(),
            returned = scored.len(),
            "matched recipes"
        );
        scored
    }
}
