use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{MealMdError, Result};
use crate::models::{Goal, TargetKind};
use crate::recommender::constants::{BASE_TARGET_WEIGHT, PRIMARY_TARGET_WEIGHT};

/// How a sodium limit is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SodiumPolicy {
    /// Meals above the limit are excluded.
    #[default]
    Hard,
    /// The limit is a soft target; distance from it lowers the score.
    Soft,
    /// Meals above the limit are ranked lower by how far they exceed it;
    /// meals under it are not penalized.
    Ceiling,
}

/// Runtime-configurable scoring knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub sodium_policy: SodiumPolicy,
    pub primary_weight: f64,
    pub base_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sodium_policy: SodiumPolicy::default(),
            primary_weight: PRIMARY_TARGET_WEIGHT,
            base_weight: BASE_TARGET_WEIGHT,
        }
    }
}

impl ScoringConfig {
    /// Load knobs from a JSON file; missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Weights must be finite and positive to keep scores in (0, 1].
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("primary_weight", self.primary_weight),
            ("base_weight", self.base_weight),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MealMdError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }

    /// Weight applied to the deviation on `kind` for `goal`.
    pub fn weight_for(&self, goal: Goal, kind: TargetKind) -> f64 {
        if goal.primary_target() == Some(kind) {
            self.primary_weight
        } else {
            self.base_weight
        }
    }
}
