// ABOUTME: Recipe record with a structured ingredient list parsed once at load
// ABOUTME: Title, ingredient lines, rating, and source URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

use serde::{Deserialize, Serialize};

/// One recipe from the recipe table
///
/// The source file stores the ingredient list as a serialized string per
/// row; the loader parses it into `ingredients` exactly once, so matching
/// never reparses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe title
    pub title: String,
    /// Ingredient lines, e.g. "2 garlic cloves, minced"
    pub ingredients: Vec<String>,
    /// User rating from the source data
    pub rating: f64,
    /// Source URL
    pub url: String,
}
