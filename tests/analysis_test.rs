// ABOUTME: Tests for ingredient comparison and top-N nutrient ranking
// ABOUTME: Covers substring column resolution, stable ordering, and insufficient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

mod common;

use nutrisage::{AdvisorError, TableAnalyzer};

#[test]
fn top_by_nutrient_is_bounded_and_descending() {
    let table = common::sample_table();
    let analyzer = TableAnalyzer::new(&table);
    let ranked = analyzer.top_by_nutrient("protein", 3).expect("resolves");

    assert!(ranked.len() <= 3);
    for pair in ranked.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
    for entry in &ranked {
        assert!(table.find(&entry.name).is_some());
    }
    assert_eq!(ranked[0].name, "Salmon");
}

#[test]
fn column_resolution_ignores_case() {
    let table = common::sample_table();
    let analyzer = TableAnalyzer::new(&table);
    let upper = analyzer.top_by_nutrient("PROTEIN", 5).expect("resolves");
    let lower = analyzer.top_by_nutrient("protein", 5).expect("resolves");
    let names = |ranked: &[nutrisage::RankedIngredient]| {
        ranked.iter().map(|r| r.name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&upper), names(&lower));
}

#[test]
fn column_resolution_matches_substrings() {
    // "fiber" must resolve the column literally named "Fiber, total dietary"
    let table = common::sample_table();
    let ranked = TableAnalyzer::new(&table)
        .top_by_nutrient("fiber", 1)
        .expect("resolves");
    assert_eq!(ranked[0].name, "Oats");
    assert_eq!(ranked[0].value, 40.0);
}

#[test]
fn unknown_nutrient_is_a_schema_error() {
    let table = common::sample_table();
    let result = TableAnalyzer::new(&table).top_by_nutrient("caffeine", 5);
    assert!(matches!(result, Err(AdvisorError::Schema { .. })));
}

#[test]
fn ranking_skips_rows_without_values() {
    // Oats and Honey have no recorded vitamin A and must not appear.
    let table = common::sample_table();
    let ranked = TableAnalyzer::new(&table)
        .top_by_nutrient("vitamin a", 20)
        .expect("resolves");
    assert!(ranked.iter().all(|r| r.name != "Oats" && r.name != "Honey"));
}

#[test]
fn ranking_ties_keep_table_order() {
    // Spinach and Kale both sit at 6.0 protein; Spinach comes first in
    // the source table.
    let table = common::sample_table();
    let ranked = TableAnalyzer::new(&table)
        .top_by_nutrient("protein", 20)
        .expect("resolves");
    let spinach = ranked.iter().position(|r| r.name == "Spinach");
    let kale = ranked.iter().position(|r| r.name == "Kale");
    assert!(spinach < kale);
}

#[test]
fn compare_requires_two_resolved_ingredients() {
    let table = common::sample_table();
    let analyzer = TableAnalyzer::new(&table);

    let both_unknown = analyzer.compare(&["dragonfruit", "starfruit"]);
    assert!(matches!(
        both_unknown,
        Err(AdvisorError::InsufficientData { .. })
    ));

    // One known and one unknown is still insufficient.
    let one_known = analyzer.compare(&["spinach", "starfruit"]);
    match one_known {
        Err(AdvisorError::InsufficientData {
            resolved,
            missing,
            required,
        }) => {
            assert_eq!(resolved, vec!["spinach".to_owned()]);
            assert_eq!(missing, vec!["starfruit".to_owned()]);
            assert_eq!(required, 2);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn compare_suppresses_zero_values() {
    let table = common::sample_table();
    let report = TableAnalyzer::new(&table)
        .compare(&["Spinach", "Lentils"])
        .expect("two resolved");

    let vitamin_a = report
        .rows
        .iter()
        .find(|row| row.nutrient == "Vitamin A, RAE")
        .expect("row present");
    // Lentils records 0.0 vitamin A and is suppressed from the row.
    assert_eq!(vitamin_a.values.len(), 1);
    assert_eq!(vitamin_a.values[0].0, "spinach");
}

#[test]
fn compare_reports_missing_names_without_failing() {
    let table = common::sample_table();
    let report = TableAnalyzer::new(&table)
        .compare(&["spinach", "lentils", "dragonfruit"])
        .expect("two resolved");
    assert_eq!(report.compared, vec!["spinach", "lentils"]);
    assert_eq!(report.missing, vec!["dragonfruit"]);
}

#[test]
fn compare_rows_follow_table_column_order() {
    let table = common::sample_table();
    let report = TableAnalyzer::new(&table)
        .compare(&["spinach", "yogurt"])
        .expect("two resolved");
    let row_names: Vec<&str> = report.rows.iter().map(|r| r.nutrient.as_str()).collect();
    // Every column has at least one positive value for this pair, so the
    // rows mirror the table's column order exactly.
    assert_eq!(row_names, common::COLUMNS.to_vec());
}

#[test]
fn top_nutrients_ranks_one_ingredient() {
    let table = common::sample_table();
    let top = TableAnalyzer::new(&table)
        .top_nutrients("spinach", 2)
        .expect("known ingredient");
    assert_eq!(top[0], ("Vitamin A, RAE".to_owned(), 52.0));
    assert_eq!(top[1], ("Iron, Fe".to_owned(), 15.0));
}

#[test]
fn top_nutrients_for_unknown_is_not_found() {
    let table = common::sample_table();
    let result = TableAnalyzer::new(&table).top_nutrients("dragonfruit", 5);
    assert!(matches!(
        result,
        Err(AdvisorError::IngredientNotFound { .. })
    ));
}
