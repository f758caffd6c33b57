// ABOUTME: Side-by-side ingredient comparison and top-N nutrient ranking
// ABOUTME: TableAnalyzer produces ComparisonReport and stable descending rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Table analysis
//!
//! Comparison aligns nutrient vectors for two or more resolved
//! ingredients; ranking orders the whole table by a single nutrient
//! column. Both honor the table's source column order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::NutrientTable;

/// Minimum resolved ingredients required for a comparison
const MIN_COMPARED: usize = 2;

/// One ranked entry from [`TableAnalyzer::top_by_nutrient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedIngredient {
    /// Ingredient name
    pub name: String,
    /// Value of the ranked nutrient column (%DV)
    pub value: f64,
}

/// One nutrient row of a comparison
///
/// Only strictly-positive values appear; ingredients at zero for this
/// nutrient are suppressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientComparison {
    /// Nutrient column name
    pub nutrient: String,
    /// (ingredient, value) pairs in comparison order
    pub values: Vec<(String, f64)>,
}

/// Side-by-side comparison of two or more ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Resolved ingredient names, lowercased, in request order
    pub compared: Vec<String>,
    /// Requested names that did not resolve (partial success, not fatal)
    pub missing: Vec<String>,
    /// Per-nutrient rows in table column order; all-zero rows suppressed
    pub rows: Vec<NutrientComparison>,
}

/// Read-only analysis operations over a nutrient table
pub struct TableAnalyzer<'a> {
    table: &'a NutrientTable,
}

impl<'a> TableAnalyzer<'a> {
    /// Create an analyzer over a loaded table
    #[must_use]
    pub const fn new(table: &'a NutrientTable) -> Self {
        Self { table }
    }

    /// Compare the nutrient vectors of the named ingredients
    ///
    /// Names that do not resolve are reported in the result and skipped.
    ///
    /// # Errors
    /// Returns [`AdvisorError::InsufficientData`] when fewer than two
    /// names resolve, carrying both resolved and missing names so callers
    /// can render the partial failure.
    pub fn compare(&self, names: &[&str]) -> AdvisorResult<ComparisonReport> {
        let mut compared = Vec::new();
        let mut missing = Vec::new();
        let mut resolved = Vec::new();

        for name in names {
            match self.table.find(name) {
                Some(record) => {
                    compared.push(name.trim().to_lowercase());
                    resolved.push(record);
                }
                None => {
                    debug!(ingredient = *name, "no data for compared ingredient");
                    missing.push((*name).to_owned());
                }
            }
        }

        if resolved.len() < MIN_COMPARED {
            return Err(AdvisorError::InsufficientData {
                resolved: compared,
                missing,
                required: MIN_COMPARED,
            });
        }

        let mut rows = Vec::new();
        for (index, nutrient) in self.table.nutrient_names().iter().enumerate() {
            let values: Vec<(String, f64)> = compared
                .iter()
                .zip(&resolved)
                .filter_map(|(name, record)| {
                    let value = record.nutrient_or_zero(index);
                    (value > 0.0).then(|| (name.clone(), value))
                })
                .collect();
            if !values.is_empty() {
                rows.push(NutrientComparison {
                    nutrient: nutrient.clone(),
                    values,
                });
            }
        }

        Ok(ComparisonReport {
            compared,
            missing,
            rows,
        })
    }

    /// Top `n` ingredients by a nutrient column, descending
    ///
    /// The column is resolved by case-insensitive substring match, first
    /// match wins. Rows without a recorded value for the column are
    /// excluded; ties keep source table order (stable sort).
    ///
    /// # Errors
    /// Returns a schema error when no column matches the query.
    pub fn top_by_nutrient(&self, query: &str, n: usize) -> AdvisorResult<Vec<RankedIngredient>> {
        let column = self.table.resolve_nutrient(query)?;
        let mut ranked: Vec<RankedIngredient> = self
            .table
            .records()
            .iter()
            .filter_map(|record| {
                record.nutrients.get(column).copied().flatten().map(|value| {
                    RankedIngredient {
                        name: record.name.clone(),
                        value,
                    }
                })
            })
            .collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked.truncate(n);
        Ok(ranked)
    }

    /// An ingredient's `n` highest nutrient values, descending
    ///
    /// # Errors
    /// Returns [`AdvisorError::IngredientNotFound`] when the name is
    /// absent from the table.
    pub fn top_nutrients(&self, name: &str, n: usize) -> AdvisorResult<Vec<(String, f64)>> {
        let record = self
            .table
            .find(name)
            .ok_or_else(|| AdvisorError::IngredientNotFound {
                name: name.to_owned(),
            })?;
        let mut values: Vec<(String, f64)> = self
            .table
            .nutrient_names()
            .iter()
            .enumerate()
            .filter_map(|(index, nutrient)| {
                record
                    .nutrients
                    .get(index)
                    .copied()
                    .flatten()
                    .map(|value| (nutrient.clone(), value))
            })
            .collect();
        values.sort_by(|a, b| b.1.total_cmp(&a.1));
        values.truncate(n);
        Ok(values)
    }
}
