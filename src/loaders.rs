// ABOUTME: Loading of nutrient tables, recipe tables, and cluster model artifacts
// ABOUTME: Quote-aware CSV parsing, python-literal ingredient lists, serde JSON models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Data loading
//!
//! Everything is loaded once, before any query runs. Schema resolution
//! for the nutrient table happens here: headers are scanned
//! case-insensitively for "ingredient" and "cluster", and a missing
//! column fails the load with a schema error instead of surfacing later
//! in lookups.
//!
//! Recipe ingredient cells arrive as serialized lists. Both python
//! literal syntax (`['a', 'b']`) and JSON (`["a", "b"]`) are accepted and
//! parsed exactly once, at load.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::cluster::{KMeansModel, StandardScaler};
use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::{IngredientRecord, NutrientTable, Recipe};

/// Load and schema-validate a nutrient table from a CSV file
///
/// # Errors
/// Returns a storage error if the file cannot be read, a format error on
/// malformed CSV, or a schema error when the ingredient or cluster
/// column is missing.
pub fn load_nutrient_table(path: &Path) -> AdvisorResult<NutrientTable> {
    let text = read_file(path)?;
    let table = parse_nutrient_table(&text)?;
    debug!(
        path = %path.display(),
        rows = table.records().len(),
        nutrients = table.nutrient_names().len(),
        "loaded nutrient table"
    );
    Ok(table)
}

/// Parse a nutrient table from CSV text
///
/// # Errors
/// Same conditions as [`load_nutrient_table`], minus the I/O.
pub fn parse_nutrient_table(text: &str) -> AdvisorResult<NutrientTable> {
    let rows = parse_csv(text)?;
    let Some((headers, data)) = rows.split_first() else {
        return Err(AdvisorError::Schema {
            entity: "nutrient table",
            reason: "file has no header row".to_owned(),
        });
    };

    let ingredient_col =
        find_header(headers, "ingredient").ok_or_else(|| AdvisorError::Schema {
            entity: "nutrient table",
            reason: "no 'Ingredient' column in header".to_owned(),
        })?;
    let cluster_col = find_header(headers, "cluster").ok_or_else(|| AdvisorError::Schema {
        entity: "nutrient table",
        reason: "no 'Cluster' column in header".to_owned(),
    })?;

    let nutrient_cols: Vec<usize> = (0..headers.len())
        .filter(|&i| i != ingredient_col && i != cluster_col)
        .collect();
    let nutrient_names: Vec<String> = nutrient_cols
        .iter()
        .map(|&i| headers[i].trim().to_owned())
        .collect();

    let mut records = Vec::with_capacity(data.len());
    for (line, cells) in data.iter().enumerate() {
        if cells.len() != headers.len() {
            return Err(AdvisorError::InvalidFormat {
                context: "nutrient table row",
                reason: format!(
                    "row {} has {} cells, expected {}",
                    line + 2,
                    cells.len(),
                    headers.len()
                ),
            });
        }
        let name = cells[ingredient_col].trim().to_owned();
        let cluster = parse_cluster(&cells[cluster_col], &name);
        let nutrients = nutrient_cols
            .iter()
            .map(|&i| parse_value(&cells[i]))
            .collect();
        records.push(IngredientRecord {
            name,
            cluster,
            nutrients,
        });
    }

    NutrientTable::new(nutrient_names, records)
}

/// Load recipes from a CSV file with title, ingredients, rating, and url
/// columns
///
/// # Errors
/// Returns a storage error if the file cannot be read, a format error on
/// malformed CSV, or a schema error when a required column is missing.
pub fn load_recipes(path: &Path) -> AdvisorResult<Vec<Recipe>> {
    let text = read_file(path)?;
    let recipes = parse_recipes(&text)?;
    debug!(path = %path.display(), count = recipes.len(), "loaded recipes");
    Ok(recipes)
}

/// Parse recipes from CSV text
///
/// # Errors
/// Same conditions as [`load_recipes`], minus the I/O.
pub fn parse_recipes(text: &str) -> AdvisorResult<Vec<Recipe>> {
    let rows = parse_csv(text)?;
    let Some((headers, data)) = rows.split_first() else {
        return Err(AdvisorError::Schema {
            entity: "recipe table",
            reason: "file has no header row".to_owned(),
        });
    };

    let column = |name: &str| {
        find_header(headers, name).ok_or_else(|| AdvisorError::Schema {
            entity: "recipe table",
            reason: format!("no '{name}' column in header"),
        })
    };
    let title_col = column("title")?;
    let ingredients_col = column("ingredients")?;
    let rating_col = column("rating")?;
    let url_col = column("url")?;

    let mut recipes = Vec::with_capacity(data.len());
    for (line, cells) in data.iter().enumerate() {
        if cells.len() != headers.len() {
            return Err(AdvisorError::InvalidFormat {
                context: "recipe table row",
                reason: format!(
                    "row {} has {} cells, expected {}",
                    line + 2,
                    cells.len(),
                    headers.len()
                ),
            });
        }
        let title = cells[title_col].trim().to_owned();
        let ingredients = parse_ingredient_list(&cells[ingredients_col], &title);
        let rating = parse_value(&cells[rating_col]).unwrap_or_else(|| {
            warn!(recipe = %title, "unparseable rating, defaulting to 0");
            0.0
        });
        recipes.push(Recipe {
            title,
            ingredients,
            rating,
            url: cells[url_col].trim().to_owned(),
        });
    }
    Ok(recipes)
}

/// Load and validate a fitted scaler artifact from JSON
///
/// # Errors
/// Returns a storage error, a model format error, or a schema error when
/// the deserialized parameters are inconsistent.
pub fn load_scaler(path: &Path) -> AdvisorResult<StandardScaler> {
    let scaler: StandardScaler = load_model(path)?;
    scaler.validate()?;
    Ok(scaler)
}

/// Load and validate a fitted k-means artifact from JSON
///
/// # Errors
/// Returns a storage error, a model format error, or a schema error when
/// the deserialized centroids are inconsistent.
pub fn load_kmeans(path: &Path) -> AdvisorResult<KMeansModel> {
    let model: KMeansModel = load_model(path)?;
    model.validate()?;
    Ok(model)
}

fn load_model<T: serde::de::DeserializeOwned>(path: &Path) -> AdvisorResult<T> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|source| AdvisorError::ModelFormat {
        path: path.display().to_string(),
        source,
    })
}

fn read_file(path: &Path) -> AdvisorResult<String> {
    fs::read_to_string(path).map_err(|source| AdvisorError::Storage {
        path: path.display().to_string(),
        source,
    })
}

/// Case-insensitive exact header lookup, first match wins
fn find_header(headers: &[String], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().to_lowercase() == name)
}

fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse().ok()
}

fn parse_cluster(cell: &str, ingredient: &str) -> Option<u32> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    // Cluster ids may be serialized as floats ("2.0") by upstream tools.
    let value: f64 = match cell.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(ingredient, cell, "unparseable cluster id");
            return None;
        }
    };
    if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(value as u32)
    } else {
        warn!(ingredient, cell, "cluster id out of range");
        None
    }
}

/// Parse a serialized ingredient list cell
///
/// Accepts JSON arrays and python list literals with single or double
/// quotes. Malformed cells yield an empty list with a warning rather
/// than failing the whole load.
fn parse_ingredient_list(cell: &str, recipe: &str) -> Vec<String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Vec::new();
    }
    if let Ok(items) = serde_json::from_str::<Vec<String>>(cell) {
        return items;
    }
    match parse_python_list(cell) {
        Some(items) => items,
        None => {
            warn!(recipe, "unparseable ingredient list");
            Vec::new()
        }
    }
}

/// Minimal python list-literal parser: quoted strings between brackets
fn parse_python_list(text: &str) -> Option<Vec<String>> {
    let body = text.strip_prefix('[')?.strip_suffix(']')?;
    let mut items = Vec::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let quote = match c {
            '\'' | '"' => c,
            _ => continue,
        };
        let mut item = String::new();
        loop {
            match chars.next()? {
                '\\' => item.push(chars.next()?),
                c if c == quote => break,
                c => item.push(c),
            }
        }
        items.push(item);
    }
    Some(items)
}

/// Parse CSV text into rows of cells
///
/// Handles quoted fields with embedded commas, escaped quotes (`""`),
/// and newlines inside quotes. Blank lines are skipped.
fn parse_csv(text: &str) -> AdvisorResult<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        cell.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => cell.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut cell)),
                '\r' => {}
                '\n' => {
                    cells.push(std::mem::take(&mut cell));
                    if cells.len() > 1 || !cells[0].trim().is_empty() {
                        rows.push(std::mem::take(&mut cells));
                    } else {
                        cells.clear();
                    }
                }
                _ => cell.push(c),
            }
        }
    }
    if in_quotes {
        return Err(AdvisorError::InvalidFormat {
            context: "csv",
            reason: "unterminated quoted field".to_owned(),
        });
    }
    if !cell.is_empty() || !cells.is_empty() {
        cells.push(cell);
        if cells.len() > 1 || !cells[0].trim().is_empty() {
            rows.push(cells);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::{parse_csv, parse_python_list};

    #[test]
    fn csv_quoted_fields_keep_commas() {
        let rows = parse_csv("a,b\n\"x, y\",2\n").unwrap();
        assert_eq!(rows[1][0], "x, y");
        assert_eq!(rows[1][1], "2");
    }

    #[test]
    fn csv_escaped_quotes() {
        let rows = parse_csv("a\n\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(rows[1][0], "say \"hi\"");
    }

    #[test]
    fn csv_newline_inside_quotes() {
        let rows = parse_csv("a,b\n\"line1\nline2\",2\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "line1\nline2");
    }

    #[test]
    fn csv_unterminated_quote_is_an_error() {
        assert!(parse_csv("a\n\"oops\n").is_err());
    }

    #[test]
    fn python_list_single_quotes() {
        let items = parse_python_list("['garlic', 'olive oil']").unwrap();
        assert_eq!(items, vec!["garlic", "olive oil"]);
    }

    #[test]
    fn python_list_escaped_quote() {
        let items = parse_python_list(r"['olive \'extra\' oil', 'salt']").unwrap();
        assert_eq!(items[0], "olive 'extra' oil");
        assert_eq!(items[1], "salt");
    }

    #[test]
    fn python_list_rejects_missing_brackets() {
        assert!(parse_python_list("'garlic', 'oil'").is_none());
    }
}
