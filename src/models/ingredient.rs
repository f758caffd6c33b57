// ABOUTME: Ingredient record and nutrient table with schema-validated column handles
// ABOUTME: Case-insensitive name lookup and substring-based nutrient column resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AdvisorError, AdvisorResult};

/// One row of the nutrient table
///
/// Nutrient values are stored positionally, aligned with the table's
/// nutrient column order. `None` means the source cell was empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Ingredient name as it appears in the source data
    pub name: String,
    /// Precomputed cluster id, if the row was clustered
    pub cluster: Option<u32>,
    /// Percent-of-daily-value per nutrient column, in table column order
    pub nutrients: Vec<Option<f64>>,
}

impl IngredientRecord {
    /// Value for the nutrient column at `index`, zero when absent
    #[must_use]
    pub fn nutrient_or_zero(&self, index: usize) -> f64 {
        self.nutrients.get(index).copied().flatten().unwrap_or(0.0)
    }
}

/// In-memory columnar nutrient table
///
/// Column resolution happens once, at load time: the loader scans headers
/// case-insensitively for "ingredient" and "cluster" and fails with a
/// schema error if either is missing. Everything left over is a nutrient
/// column, kept in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientTable {
    nutrient_names: Vec<String>,
    records: Vec<IngredientRecord>,
}

impl NutrientTable {
    /// Build a table from an ordered nutrient column list and records
    ///
    /// # Errors
    /// Returns a schema error if any record's nutrient vector does not
    /// match the column count.
    pub fn new(
        nutrient_names: Vec<String>,
        records: Vec<IngredientRecord>,
    ) -> AdvisorResult<Self> {
        for record in &records {
            if record.nutrients.len() != nutrient_names.len() {
                return Err(AdvisorError::Schema {
                    entity: "nutrient table",
                    reason: format!(
                        "row '{}' has {} nutrient values, expected {}",
                        record.name,
                        record.nutrients.len(),
                        nutrient_names.len()
                    ),
                });
            }
        }
        Ok(Self {
            nutrient_names,
            records,
        })
    }

    /// Nutrient column names in source order
    #[must_use]
    pub fn nutrient_names(&self) -> &[String] {
        &self.nutrient_names
    }

    /// All records in source order
    #[must_use]
    pub fn records(&self) -> &[IngredientRecord] {
        &self.records
    }

    /// Case-insensitive exact-match lookup; first match wins on duplicates
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&IngredientRecord> {
        let wanted = name.trim().to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase() == wanted)
    }

    /// Resolve a nutrient column by case-insensitive substring match
    ///
    /// First matching column wins, mirroring the tolerance for
    /// inconsistent header capitalization in the source data.
    ///
    /// # Errors
    /// Returns a schema error when no column matches the query.
    pub fn resolve_nutrient(&self, query: &str) -> AdvisorResult<usize> {
        let needle = query.trim().to_lowercase();
        self.nutrient_names
            .iter()
            .position(|name| name.to_lowercase().contains(&needle))
            .ok_or_else(|| AdvisorError::Schema {
                entity: "nutrient table",
                reason: format!("no nutrient column matches '{query}'"),
            })
    }

    /// Sorted, deduplicated ingredient names
    #[must_use]
    pub fn all_ingredients(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|record| record.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Ingredient names grouped by stored cluster id, ascending
    ///
    /// Unclustered rows are omitted.
    #[must_use]
    pub fn ingredients_by_cluster(&self) -> BTreeMap<u32, Vec<String>> {
        let mut groups: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for record in &self.records {
            if let Some(cluster) = record.cluster {
                groups.entry(cluster).or_default().push(record.name.clone());
            }
        }
        groups
    }
}
