// ABOUTME: Data models for the nutrient table and recipe records
// ABOUTME: Re-exports IngredientRecord, NutrientTable, and Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Core data models
//!
//! All tables are loaded once and treated as read-only for the process
//! lifetime; every lookup operation is a pure read.

/// Ingredient records and the nutrient table
pub mod ingredient;
/// Recipe records
pub mod recipe;

pub use ingredient::{IngredientRecord, NutrientTable};
pub use recipe::Recipe;
