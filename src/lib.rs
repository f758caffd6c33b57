// ABOUTME: Nutrient lookup, ingredient scoring, menu generation, and recipe matching
// ABOUTME: Library crate; all rendering and argument parsing live in the CLI binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! # Nutrisage
//!
//! Looks up, compares, and rates food ingredients from a precomputed
//! nutrient table, classifies them with a pre-fitted clustering model,
//! and recommends recipes by ingredient overlap.
//!
//! The tables and model artifacts are loaded once and never mutated;
//! every operation is a pure read except menu generation, which samples
//! from a caller-provided random source. All components return
//! structured results for a presentation layer to render — no console
//! output happens here.

/// Ingredient comparison and top-N ranking
pub mod analysis;
/// Cluster lookup and live prediction
pub mod cluster;
/// Scoring weights and menu slot configuration
pub mod config;
/// Error taxonomy
pub mod errors;
/// Table, recipe, and model artifact loading
pub mod loaders;
/// Menu generation from nutrient-priority pools
pub mod menu;
/// Data models
pub mod models;
/// Recipe matching by ingredient overlap
pub mod recipes;
/// Composite healthfulness scoring
pub mod scoring;

pub use analysis::{ComparisonReport, RankedIngredient, TableAnalyzer};
pub use cluster::{ClusterEngine, ClusterPartitioner, FeatureScaler, KMeansModel, StandardScaler};
pub use config::{MealSlot, MenuConfig, ScoringConfig, SlotPlan};
pub use errors::{AdvisorError, AdvisorResult};
pub use menu::{Menu, MenuGenerator, MenuPlan};
pub use models::{IngredientRecord, NutrientTable, Recipe};
pub use recipes::{RecipeMatch, RecipeMatcher};
pub use scoring::{IngredientScorer, MealRating, MealVerdict};
