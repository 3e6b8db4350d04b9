use std::cmp::Ordering;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::error::{MealMdError, Result};
use crate::models::{MealRecord, PreferenceProfile, ScoredMeal};
use crate::recommender::config::ScoringConfig;
use crate::recommender::filter::filter;
use crate::recommender::scoring::score_breakdown;
use crate::state::MealCatalog;

/// Filter, score, and rank catalog meals for a profile.
///
/// Holds only a shared reference to the catalog; every call is independent.
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    meals: &'a [MealRecord],
    config: ScoringConfig,
    tie_seed: Option<u64>,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a MealCatalog) -> Self {
        Self::from_meals(catalog.meals())
    }

    /// Recommender over an arbitrary slice of meals.
    pub fn from_meals(meals: &'a [MealRecord]) -> Self {
        Self {
            meals,
            config: ScoringConfig::default(),
            tie_seed: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Break score ties in a seed-determined order instead of catalog order.
    #[must_use]
    pub fn with_tie_seed(mut self, seed: Option<u64>) -> Self {
        self.tie_seed = seed;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Return up to `top_n` meals ranked 1..k by descending score.
    ///
    /// Equal scores keep catalog order (or the seeded order when a tie seed
    /// is set). An empty result means no meal passed the hard constraints;
    /// constraints are never relaxed here.
    ///
    /// # Errors
    /// [`MealMdError::InvalidTopN`] when `top_n` is zero, and
    /// [`MealMdError::InvalidWeight`] when the scoring config carries a
    /// non-positive or non-finite weight.
    pub fn recommend(&self, profile: &PreferenceProfile, top_n: usize) -> Result<Vec<ScoredMeal<'a>>> {
        if top_n == 0 {
            return Err(MealMdError::InvalidTopN(top_n));
        }
        self.config.validate()?;

        let mut candidates = filter(self.meals, profile, self.config.sodium_policy);
        let candidate_count = candidates.len();

        if let Some(seed) = self.tie_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            candidates.shuffle(&mut rng);
        }

        let mut ranked: Vec<ScoredMeal<'a>> = candidates
            .into_iter()
            .map(|meal| {
                let breakdown = score_breakdown(meal, profile, &self.config);
                ScoredMeal {
                    meal,
                    score: breakdown.score(),
                    rank: 0,
                    breakdown,
                }
            })
            .collect();

        // Stable: equal scores keep their current relative order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_n);
        for (i, item) in ranked.iter_mut().enumerate() {
            item.rank = i + 1;
        }

        info!(
            catalog = self.meals.len(),
            candidates = candidate_count,
            returned = ranked.len(),
            "ranked meals"
        );

        Ok(ranked)
    }
}

/// Rank `meals` for `profile` with the default scoring configuration.
pub fn recommend<'a>(
    meals: &'a [MealRecord],
    profile: &PreferenceProfile,
    top_n: usize,
) -> Result<Vec<ScoredMeal<'a>>> {
    Recommender::from_meals(meals).recommend(profile, top_n)
}
