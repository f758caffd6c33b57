// ABOUTME: Nutrisage CLI - ingredient lookup, comparison, rating, menus, and recipes
// ABOUTME: Thin presentation layer over the library; all logic lives in nutrisage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project
//!
//! Usage:
//! ```bash
//! # Cluster and top-5 nutrients for one ingredient
//! nutrisage show pasta
//!
//! # Compare several ingredients side by side
//! nutrisage compare milk honey jam
//!
//! # Ingredients grouped by cluster
//! nutrisage list
//!
//! # Top 5 ingredients by a nutrient
//! nutrisage top protein --count 5
//!
//! # Predict a cluster from the fitted model
//! nutrisage predict pasta
//!
//! # Rate a meal
//! nutrisage rate spinach lentils
//!
//! # Generate a daily menu with recipe suggestions
//! nutrisage menu
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use nutrisage::errors::AdvisorResult;
use nutrisage::loaders;
use nutrisage::{
    AdvisorError, ClusterEngine, IngredientScorer, MenuGenerator, NutrientTable, RecipeMatcher,
    ScoringConfig, TableAnalyzer,
};

/// Recipe suggestions shown per generated meal slot
const RECIPES_PER_SLOT: usize = 3;
/// Nutrients shown for a single-ingredient view
const TOP_NUTRIENTS_SHOWN: usize = 5;

#[derive(Parser)]
#[command(
    name = "nutrisage",
    about = "Nutrient lookup, ingredient scoring, and recipe matching",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrient table CSV
    #[arg(long, global = true, default_value = "nutrition_facts_with_clusters.csv")]
    nutrition: PathBuf,

    /// Recipe table CSV
    #[arg(long, global = true, default_value = "recipes.csv")]
    recipes: PathBuf,

    /// Fitted scaler artifact (JSON)
    #[arg(long, global = true, default_value = "scaler.json")]
    scaler: PathBuf,

    /// Fitted k-means artifact (JSON)
    #[arg(long, global = true, default_value = "kmeans.json")]
    kmeans: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show an ingredient's stored cluster and top nutrients
    Show {
        /// Ingredient name
        ingredient: String,
    },

    /// Compare two or more ingredients nutrient by nutrient
    Compare {
        /// Ingredient names
        #[arg(required = true, num_args = 2..)]
        ingredients: Vec<String>,
    },

    /// List all ingredients grouped by cluster
    List,

    /// Top ingredients by a nutrient
    Top {
        /// Nutrient name (substring match against columns)
        nutrient: String,
        /// Number of results
        #[arg(long, default_value_t = 10)]
        count: usize,
    },

    /// Predict an ingredient's cluster from the fitted model
    Predict {
        /// Ingredient name
        ingredient: String,
    },

    /// Rate a set of ingredients and the meal overall
    Rate {
        /// Ingredient names
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Generate a daily menu with scores and recipe suggestions
    Menu,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AdvisorResult<()> {
    let table = loaders::load_nutrient_table(&cli.nutrition)?;

    match &cli.command {
        Command::Show { ingredient } => show(&table, ingredient),
        Command::Compare { ingredients } => compare(&table, ingredients),
        Command::List => {
            list(&table);
            Ok(())
        }
        Command::Top { nutrient, count } => top(&table, nutrient, *count),
        Command::Predict { ingredient } => {
            let scaler = loaders::load_scaler(&cli.scaler)?;
            let kmeans = loaders::load_kmeans(&cli.kmeans)?;
            let engine = ClusterEngine::new(&table, scaler, kmeans);
            let cluster = engine.predict_cluster(ingredient)?;
            println!(
                "Predicted cluster for {}: {cluster}",
                ingredient.to_lowercase()
            );
            Ok(())
        }
        Command::Rate { ingredients } => {
            rate(&table, ingredients);
            Ok(())
        }
        Command::Menu => {
            let recipes = loaders::load_recipes(&cli.recipes)?;
            menu(&table, &recipes)
        }
    }
}

fn show(table: &NutrientTable, ingredient: &str) -> AdvisorResult<()> {
    let record = table
        .find(ingredient)
        .ok_or_else(|| AdvisorError::IngredientNotFound {
            name: ingredient.to_owned(),
        })?;
    println!("Ingredient: {}", record.name.to_lowercase());
    match record.cluster {
        Some(cluster) => println!("Cluster: {cluster}"),
        None => println!("Cluster: unassigned"),
    }
    let analyzer = TableAnalyzer::new(table);
    println!("Top {TOP_NUTRIENTS_SHOWN} nutrients:");
    for (nutrient, value) in analyzer.top_nutrients(ingredient, TOP_NUTRIENTS_SHOWN)? {
        println!("- {nutrient}: {value:.1}% of daily value");
    }
    Ok(())
}

fn compare(table: &NutrientTable, ingredients: &[String]) -> AdvisorResult<()> {
    let names: Vec<&str> = ingredients.iter().map(String::as_str).collect();
    let report = TableAnalyzer::new(table).compare(&names)?;
    for name in &report.missing {
        println!("No data for ingredient: {name}");
    }
    println!("Comparing: {}", report.compared.join(", "));
    for row in &report.rows {
        let values: Vec<String> = row
            .values
            .iter()
            .map(|(name, value)| format!("{name}: {value:.1}%"))
            .collect();
        println!("{} -> {}", row.nutrient, values.join(", "));
    }
    Ok(())
}

fn list(table: &NutrientTable) {
    println!("Ingredients by cluster:");
    for (cluster, items) in table.ingredients_by_cluster() {
        println!("\nCluster {cluster} ({} ingredients):", items.len());
        for item in items {
            println!("- {item}");
        }
    }
}

fn top(table: &NutrientTable, nutrient: &str, count: usize) -> AdvisorResult<()> {
    let ranked = TableAnalyzer::new(table).top_by_nutrient(nutrient, count)?;
    println!("Top {count} by nutrient: {nutrient}");
    for entry in ranked {
        println!("- {}: {:.1}% of daily value", entry.name, entry.value);
    }
    Ok(())
}

fn rate(table: &NutrientTable, ingredients: &[String]) {
    let names: Vec<&str> = ingredients.iter().map(String::as_str).collect();
    let rating = IngredientScorer::new(table).rate_meal(&names);
    for (name, score) in &rating.scores {
        println!("- {name}: {score}");
    }
    let verdict = match rating.verdict {
        nutrisage::MealVerdict::Great => "great",
        nutrisage::MealVerdict::SoSo => "so-so",
        nutrisage::MealVerdict::Bad => "bad",
    };
    println!("\nOverall rating: {verdict} ({})", rating.average);
}

fn menu(table: &NutrientTable, recipes: &[nutrisage::Recipe]) -> AdvisorResult<()> {
    let matcher = RecipeMatcher::new(recipes);
    let generator = MenuGenerator::new(table);
    let plan = generator.plan(
        &mut thread_rng(),
        &ScoringConfig::default(),
        &matcher,
        RECIPES_PER_SLOT,
    )?;

    for meal in &plan.slots {
        println!("\n{}:", meal.slot.as_str());
        for pick in &meal.picks {
            println!("- {} (health score: {})", pick.name, pick.score);
        }
        if meal.recipes.is_empty() {
            println!("  no matching recipes");
        } else {
            for (index, matched) in meal.recipes.iter().enumerate() {
                println!(
                    "  {}. {} (rating: {})",
                    index + 1,
                    matched.recipe.title,
                    matched.recipe.rating
                );
                println!("     ingredients: {}", matched.recipe.ingredients.join(", "));
                println!("     url: {}", matched.recipe.url);
            }
        }
    }
    Ok(())
}
