use crate::models::{DeviationTerm, MealRecord, PreferenceProfile, ScoreBreakdown, TargetKind};
use crate::recommender::config::{ScoringConfig, SodiumPolicy};

/// Normalized absolute deviation, or `None` when the target is zero.
fn relative_deviation(actual: f64, target: f64) -> Option<f64> {
    if target > 0.0 {
        Some((actual - target).abs() / target)
    } else {
        None
    }
}

/// Normalized overage above a ceiling; being under the ceiling costs nothing.
fn ceiling_overage(actual: f64, limit: f64) -> Option<f64> {
    if limit > 0.0 {
        Some((actual - limit).max(0.0) / limit)
    } else {
        None
    }
}

/// Break a meal's fit down per soft target.
///
/// A term is skipped when the target is unset or zero, or when the meal does
/// not carry that macro. Sodium contributes under [`SodiumPolicy::Soft`] as
/// a distance from the limit, and under [`SodiumPolicy::Ceiling`] as the
/// overage above it; under [`SodiumPolicy::Hard`] it is left to the filter.
pub fn score_breakdown(
    meal: &MealRecord,
    profile: &PreferenceProfile,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let goal = profile.goal();
    let mut terms = Vec::new();

    for kind in TargetKind::MACROS {
        let (Some(target), Some(actual)) = (profile.target(kind), meal.nutrient(kind)) else {
            continue;
        };
        if let Some(deviation) = relative_deviation(actual, target) {
            terms.push(DeviationTerm {
                kind,
                actual,
                target,
                deviation,
                weight: config.weight_for(goal, kind),
            });
        }
    }

    if let Some(limit) = profile.sodium_limit_milligrams() {
        let actual = meal.sodium_milligrams();
        let sodium_deviation = match config.sodium_policy {
            SodiumPolicy::Hard => None,
            SodiumPolicy::Soft => relative_deviation(actual, limit),
            SodiumPolicy::Ceiling => ceiling_overage(actual, limit),
        };
        if let Some(deviation) = sodium_deviation {
            terms.push(DeviationTerm {
                kind: TargetKind::Sodium,
                actual,
                target: limit,
                deviation,
                weight: config.weight_for(goal, TargetKind::Sodium),
            });
        }
    }

    ScoreBreakdown { terms }
}

/// Fitness of `meal` for `profile` in (0, 1]; higher is better.
pub fn score(meal: &MealRecord, profile: &PreferenceProfile, config: &ScoringConfig) -> f64 {
    score_breakdown(meal, profile, config).score()
}
