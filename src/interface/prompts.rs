use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{MealMdError, Result};
use crate::models::{DietTag, Goal, TargetKind};
use crate::recommender::constants::SUGGESTION_SIMILARITY;

const BACK_LABEL: &str = "← Back";

/// Result of one wizard prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T> {
    Answer(T),
    Back,
}

fn is_back(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("b")
}

fn is_none(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input == "0" || input == "-" || input.eq_ignore_ascii_case("none")
}

/// Parse a numeric answer: blank or "none" unsets it, "b" goes back.
pub fn parse_amount(input: &str) -> Result<StepOutcome<Option<f64>>> {
    if is_back(input) {
        return Ok(StepOutcome::Back);
    }
    let input = input.trim();
    if input.is_empty() || input == "-" || input.eq_ignore_ascii_case("none") {
        return Ok(StepOutcome::Answer(None));
    }

    let value: f64 = input
        .parse()
        .map_err(|_| MealMdError::InvalidInput(format!("'{}' is not a number", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(MealMdError::InvalidInput(
            "Enter a number that is zero or more".to_string(),
        ));
    }

    Ok(StepOutcome::Answer(Some(value)))
}

/// Parse a comma-separated ingredient list into trimmed lowercase terms.
///
/// "b" goes back; blank, "0" or "none" means nothing to avoid.
pub fn parse_ingredient_list(input: &str) -> StepOutcome<Vec<String>> {
    if is_back(input) {
        return StepOutcome::Back;
    }
    if is_none(input) {
        return StepOutcome::Answer(Vec::new());
    }

    let mut terms: Vec<String> = Vec::new();
    for term in input.split(',').map(|t| t.trim().to_lowercase()) {
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }
    StepOutcome::Answer(terms)
}

/// Closest known ingredient for a term that matches none of them.
///
/// Returns `None` when the term already occurs in some ingredient or when
/// nothing is similar enough.
pub fn suggest_ingredient<'a>(term: &str, known: &'a [String]) -> Option<&'a str> {
    let term = term.to_lowercase();
    if known.iter().any(|k| k.contains(&term)) {
        return None;
    }

    known
        .iter()
        .map(|k| (k, jaro_winkler(k, &term)))
        .filter(|(_, score)| *score >= SUGGESTION_SIMILARITY)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k.as_str())
}

/// Prompt for the dietary goal.
pub fn prompt_goal(default: Option<Goal>) -> Result<Goal> {
    let items: Vec<&str> = Goal::ALL.iter().map(Goal::label).collect();
    let default_idx = default
        .and_then(|g| Goal::ALL.iter().position(|x| *x == g))
        .unwrap_or(1);

    let selection = Select::new()
        .with_prompt("What's your current goal?")
        .items(&items)
        .default(default_idx)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for diet requirements (multi-select).
pub fn prompt_diet_tags(defaults: &BTreeSet<DietTag>) -> Result<StepOutcome<BTreeSet<DietTag>>> {
    let mut items: Vec<&str> = DietTag::ALL.iter().map(DietTag::label).collect();
    items.push(BACK_LABEL);

    let mut checked: Vec<bool> = DietTag::ALL.iter().map(|t| defaults.contains(t)).collect();
    checked.push(false);

    let selection = MultiSelect::new()
        .with_prompt("Any diet requirements? (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&checked)
        .interact()?;

    if selection.contains(&DietTag::ALL.len()) {
        return Ok(StepOutcome::Back);
    }

    Ok(StepOutcome::Answer(
        selection.into_iter().map(|i| DietTag::ALL[i]).collect(),
    ))
}

/// Prompt for ingredients to avoid, offering fuzzy corrections.
pub fn prompt_avoid_ingredients(
    defaults: &[String],
    known: &[String],
) -> Result<StepOutcome<Vec<String>>> {
    let mut input = Input::<String>::new()
        .with_prompt("Ingredients to avoid? (comma-separated, blank for none, 'b' to go back)")
        .allow_empty(true);
    if !defaults.is_empty() {
        input = input.default(defaults.join(", "));
    }
    let raw = input.interact_text()?;

    let terms = match parse_ingredient_list(&raw) {
        StepOutcome::Back => return Ok(StepOutcome::Back),
        StepOutcome::Answer(terms) => terms,
    };

    let mut accepted = Vec::with_capacity(terms.len());
    for term in terms {
        match suggest_ingredient(&term, known) {
            Some(suggestion) => {
                let confirm = Confirm::new()
                    .with_prompt(format!("No ingredient contains '{}'. Did you mean '{}'?", term, suggestion))
                    .default(true)
                    .interact()?;
                accepted.push(if confirm { suggestion.to_string() } else { term });
            }
            None => accepted.push(term),
        }
    }

    if !accepted.is_empty() {
        println!("Avoiding: {}", accepted.join(", "));
    }

    Ok(StepOutcome::Answer(accepted))
}

/// Prompt for an optional numeric target.
pub fn prompt_target(kind: TargetKind, default: Option<f64>) -> Result<StepOutcome<Option<f64>>> {
    let prompt = match kind {
        TargetKind::Sodium => "Sodium limit per meal in mg? (blank for none, 'b' to go back)".to_string(),
        _ => format!(
            "Target {} per meal in {}? (blank for none, 'b' to go back)",
            kind.label(),
            kind.unit()
        ),
    };

    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|s: &String| parse_amount(s).map(|_| ()).map_err(|e| e.to_string()));
    if let Some(value) = default {
        input = input.default(format!("{}", value));
    }

    parse_amount(&input.interact_text()?)
}
