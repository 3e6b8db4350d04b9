use serde::Serialize;

use crate::models::meal::MealRecord;
use crate::models::profile::TargetKind;

/// One weighted term of a fitness score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviationTerm {
    pub kind: TargetKind,
    pub actual: f64,
    pub target: f64,
    /// Normalized deviation from the target (0.0 = exact).
    pub deviation: f64,
    pub weight: f64,
}

impl DeviationTerm {
    pub fn weighted(&self) -> f64 {
        self.deviation * self.weight
    }
}

/// Per-target contributions behind a fitness score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<DeviationTerm>,
}

impl ScoreBreakdown {
    /// Sum of weighted deviations.
    pub fn weighted_sum(&self) -> f64 {
        self.terms.iter().map(DeviationTerm::weighted).sum()
    }

    /// Fitness in (0, 1]; 1.0 when nothing was compared.
    pub fn score(&self) -> f64 {
        1.0 / (1.0 + self.weighted_sum())
    }

    /// Terms whose deviation is within `tolerance`.
    pub fn close_matches(&self, tolerance: f64) -> impl Iterator<Item = &DeviationTerm> {
        self.terms.iter().filter(move |t| t.deviation <= tolerance)
    }
}

/// A candidate meal with its score and 1-based rank.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMeal<'a> {
    pub meal: &'a MealRecord,
    pub score: f64,
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
}
