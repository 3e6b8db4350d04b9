use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MealMdError, Result};
use crate::models::meal::DietTag;

/// What the user is eating for. Decides which target dominates the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::Maintain, Goal::GainMuscle];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "Lose weight (cut)",
            Goal::Maintain => "Maintain",
            Goal::GainMuscle => "Gain muscle (bulk)",
        }
    }

    /// The target weighted above the others, if any.
    pub fn primary_target(&self) -> Option<TargetKind> {
        match self {
            Goal::LoseWeight => Some(TargetKind::Calories),
            Goal::GainMuscle => Some(TargetKind::Protein),
            Goal::Maintain => None,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A soft target a meal is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Calories,
    Protein,
    Carbs,
    Fat,
    Sodium,
}

impl TargetKind {
    pub const MACROS: [TargetKind; 4] = [
        TargetKind::Calories,
        TargetKind::Protein,
        TargetKind::Carbs,
        TargetKind::Fat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Calories => "calories",
            TargetKind::Protein => "protein",
            TargetKind::Carbs => "carbs",
            TargetKind::Fat => "fat",
            TargetKind::Sodium => "sodium",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TargetKind::Calories => "kcal",
            TargetKind::Sodium => "mg",
            _ => "g",
        }
    }
}

/// Optional per-macro targets. Unset fields are ignored by the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_protein: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_carb: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_fat: Option<f64>,
}

impl MacroTargets {
    pub fn get(&self, kind: TargetKind) -> Option<f64> {
        match kind {
            TargetKind::Calories => self.target_calories,
            TargetKind::Protein => self.target_protein,
            TargetKind::Carbs => self.target_carb,
            TargetKind::Fat => self.target_fat,
            TargetKind::Sodium => None,
        }
    }

    pub fn set(&mut self, kind: TargetKind, value: Option<f64>) {
        match kind {
            TargetKind::Calories => self.target_calories = value,
            TargetKind::Protein => self.target_protein = value,
            TargetKind::Carbs => self.target_carb = value,
            TargetKind::Fat => self.target_fat = value,
            TargetKind::Sodium => {}
        }
    }
}

/// Validated user preferences for one session.
///
/// Only obtainable through [`ProfileBuilder::build`], including when read
/// back from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileBuilder", into = "ProfileBuilder")]
pub struct PreferenceProfile {
    goal: Goal,
    required_diet_tags: BTreeSet<DietTag>,
    avoid_ingredients: BTreeSet<String>,
    macro_targets: MacroTargets,
    sodium_limit_milligrams: Option<f64>,
}

impl PreferenceProfile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn required_diet_tags(&self) -> &BTreeSet<DietTag> {
        &self.required_diet_tags
    }

    /// Lowercased, trimmed, non-empty avoid terms.
    pub fn avoid_ingredients(&self) -> &BTreeSet<String> {
        &self.avoid_ingredients
    }

    pub fn macro_targets(&self) -> &MacroTargets {
        &self.macro_targets
    }

    pub fn sodium_limit_milligrams(&self) -> Option<f64> {
        self.sodium_limit_milligrams
    }

    /// Target for `kind`, sodium included.
    pub fn target(&self, kind: TargetKind) -> Option<f64> {
        match kind {
            TargetKind::Sodium => self.sodium_limit_milligrams,
            _ => self.macro_targets.get(kind),
        }
    }
}

/// Accumulates wizard answers and yields a [`PreferenceProfile`] once
/// every field validates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileBuilder {
    #[serde(default)]
    pub goal: Option<Goal>,

    #[serde(default)]
    pub required_diet_tags: BTreeSet<DietTag>,

    #[serde(default)]
    pub avoid_ingredients: Vec<String>,

    #[serde(default)]
    pub macro_targets: MacroTargets,

    #[serde(default)]
    pub sodium_limit_milligrams: Option<f64>,
}

impl ProfileBuilder {
    #[must_use]
    pub fn goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    #[must_use]
    pub fn require_tag(mut self, tag: DietTag) -> Self {
        self.required_diet_tags.insert(tag);
        self
    }

    #[must_use]
    pub fn avoid(mut self, ingredient: impl Into<String>) -> Self {
        self.avoid_ingredients.push(ingredient.into());
        self
    }

    #[must_use]
    pub fn target(mut self, kind: TargetKind, value: f64) -> Self {
        match kind {
            TargetKind::Sodium => self.sodium_limit_milligrams = Some(value),
            _ => self.macro_targets.set(kind, Some(value)),
        }
        self
    }

    #[must_use]
    pub fn sodium_limit(mut self, milligrams: f64) -> Self {
        self.sodium_limit_milligrams = Some(milligrams);
        self
    }

    /// Validate and freeze the answers.
    ///
    /// Fails with [`MealMdError::MissingGoal`] when no goal was chosen and
    /// with [`MealMdError::InvalidTarget`] for negative or non-finite numbers.
    pub fn build(self) -> Result<PreferenceProfile> {
        let goal = self.goal.ok_or(MealMdError::MissingGoal)?;

        for kind in TargetKind::MACROS {
            if let Some(value) = self.macro_targets.get(kind) {
                check_amount(kind.label(), value)?;
            }
        }
        if let Some(limit) = self.sodium_limit_milligrams {
            check_amount(TargetKind::Sodium.label(), limit)?;
        }

        let avoid_ingredients = self
            .avoid_ingredients
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(PreferenceProfile {
            goal,
            required_diet_tags: self.required_diet_tags,
            avoid_ingredients,
            macro_targets: self.macro_targets,
            sodium_limit_milligrams: self.sodium_limit_milligrams,
        })
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MealMdError::InvalidTarget { field, value })
    }
}

impl TryFrom<ProfileBuilder> for PreferenceProfile {
    type Error = MealMdError;

    fn try_from(builder: ProfileBuilder) -> Result<Self> {
        builder.build()
    }
}

impl From<PreferenceProfile> for ProfileBuilder {
    fn from(profile: PreferenceProfile) -> Self {
        Self {
            goal: Some(profile.goal),
            required_diet_tags: profile.required_diet_tags,
            avoid_ingredients: profile.avoid_ingredients.into_iter().collect(),
            macro_targets: profile.macro_targets,
            sodium_limit_milligrams: profile.sodium_limit_milligrams,
        }
    }
}
