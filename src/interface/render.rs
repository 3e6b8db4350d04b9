use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Macros, MealRecord, PreferenceProfile, ScoredMeal};
use crate::recommender::constants::CLOSE_MATCH_TOLERANCE;

const NO_MATCHES: &str =
    "No meals fit all choices. Try relaxing a diet requirement, an avoided ingredient, or the sodium limit.";

const DISCLAIMER: &str = "Just a simple helper for meal ideas, not medical advice.";

fn amount(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.0}{}", v, unit),
        None => "?".to_string(),
    }
}

/// One-line macro summary; missing values show as "?".
pub fn format_macros(macros: &Macros) -> String {
    format!(
        "{} kcal | P {} | C {} | F {}",
        amount(macros.calories, ""),
        amount(macros.protein_grams, "g"),
        amount(macros.carb_grams, "g"),
        amount(macros.fat_grams, "g")
    )
}

/// Human-readable reasons a meal was picked.
pub fn explain(item: &ScoredMeal, profile: &PreferenceProfile) -> Vec<String> {
    let mut reasons: Vec<String> = profile
        .required_diet_tags()
        .iter()
        .map(|tag| format!("fits {}", tag.label().to_lowercase()))
        .collect();

    for term in item.breakdown.close_matches(CLOSE_MATCH_TOLERANCE) {
        reasons.push(format!(
            "{} on target ({:.0} {} vs {:.0} {})",
            term.kind.label(),
            term.actual,
            term.kind.unit(),
            term.target,
            term.kind.unit()
        ));
    }

    if !profile.avoid_ingredients().is_empty() {
        reasons.push("free of avoided ingredients".to_string());
    }

    reasons
}

/// Display ranked recommendations, or the no-match advice.
pub fn display_recommendations(results: &[ScoredMeal], profile: &PreferenceProfile) {
    println!();
    println!("=== Top Picks ===");

    if results.is_empty() {
        println!("{}", NO_MATCHES);
        return;
    }

    for item in results {
        let meal = item.meal;
        println!();
        println!("{}) {}  (score: {:.2})", item.rank, meal.name(), item.score);
        println!("   Items: {}", meal.ingredients().join(", "));
        println!("   Macros: {}", format_macros(meal.macros()));
        println!("   Sodium: {:.0} mg", meal.sodium_milligrams());
        if !meal.notes().is_empty() {
            println!("   Notes: {}", meal.notes());
        }

        let reasons = explain(item, profile);
        if !reasons.is_empty() {
            println!("   Why:");
            for reason in reasons {
                println!("    - {}", reason);
            }
        }
    }

    println!();
    println!("{}", DISCLAIMER);
}

#[derive(Serialize)]
struct JsonReport<'a> {
    top_recommendations: &'a [ScoredMeal<'a>],
    explanation: &'static str,
}

/// Ranked recommendations as pretty JSON.
pub fn render_json(results: &[ScoredMeal]) -> Result<String> {
    let report = JsonReport {
        top_recommendations: results,
        explanation: if results.is_empty() { NO_MATCHES } else { DISCLAIMER },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_default()
}

/// Write ranked recommendations to a CSV file.
pub fn write_csv(results: &[ScoredMeal], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "id",
        "name",
        "score",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "sodium_mg",
        "ingredients",
    ])?;

    for item in results {
        let meal = item.meal;
        let macros = meal.macros();
        wtr.write_record([
            item.rank.to_string(),
            meal.id().to_string(),
            meal.name().to_string(),
            format!("{:.4}", item.score),
            cell(macros.calories),
            cell(macros.protein_grams),
            cell(macros.carb_grams),
            cell(macros.fat_grams),
            format!("{:.0}", meal.sodium_milligrams()),
            meal.ingredients().join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Display every meal in a catalog.
pub fn display_meal_list(meals: &[MealRecord]) {
    if meals.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Catalog ({} meals) ===", meals.len());
    println!();

    let max_name_len = meals.iter().map(|m| m.name().len()).max().unwrap_or(10);

    for meal in meals {
        let tags: Vec<&str> = meal.diet_tags().iter().map(|t| t.label()).collect();
        println!(
            "  {:<width$}  {} | Na {:.0} mg  [{}]",
            meal.name(),
            format_macros(meal.macros()),
            meal.sodium_milligrams(),
            tags.join(", "),
            width = max_name_len
        );
    }

    println!();
}
