use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::profile::TargetKind;

/// A dietary pattern a meal can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietTag {
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    GlutenFree,
    DairyFree,
    NutFree,
}

impl DietTag {
    /// Every tag, in prompt order.
    pub const ALL: [DietTag; 7] = [
        DietTag::Vegetarian,
        DietTag::Vegan,
        DietTag::Pescatarian,
        DietTag::Keto,
        DietTag::GlutenFree,
        DietTag::DairyFree,
        DietTag::NutFree,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            DietTag::Vegetarian => "Vegetarian",
            DietTag::Vegan => "Vegan",
            DietTag::Pescatarian => "Pescatarian",
            DietTag::Keto => "Keto",
            DietTag::GlutenFree => "Gluten-free",
            DietTag::DairyFree => "Dairy-free",
            DietTag::NutFree => "Nut-free",
        }
    }
}

impl fmt::Display for DietTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pre-supplied macronutrients for one serving.
///
/// Any field may be missing in the catalog source; a missing value is
/// simply not compared against the matching target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carb_grams: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<f64>,
}

impl Macros {
    /// Fully-specified macros.
    pub fn new(calories: f64, protein_grams: f64, carb_grams: f64, fat_grams: f64) -> Self {
        Self {
            calories: Some(calories),
            protein_grams: Some(protein_grams),
            carb_grams: Some(carb_grams),
            fat_grams: Some(fat_grams),
        }
    }

    /// Value for a macro target kind. Sodium is not a macro and yields `None`.
    pub fn amount(&self, kind: TargetKind) -> Option<f64> {
        match kind {
            TargetKind::Calories => self.calories,
            TargetKind::Protein => self.protein_grams,
            TargetKind::Carbs => self.carb_grams,
            TargetKind::Fat => self.fat_grams,
            TargetKind::Sodium => None,
        }
    }
}

/// One immutable catalog entry.
///
/// Built with the `with_*` methods before it is handed to a
/// [`MealCatalog`](crate::state::MealCatalog); afterwards only shared
/// references are given out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    id: String,
    name: String,
    #[serde(default)]
    diet_tags: BTreeSet<DietTag>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    macros: Macros,
    #[serde(default)]
    sodium_milligrams: f64,
    #[serde(default)]
    notes: String,
}

impl MealRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            diet_tags: BTreeSet::new(),
            ingredients: Vec::new(),
            macros: Macros::default(),
            sodium_milligrams: 0.0,
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = DietTag>) -> Self {
        self.diet_tags.extend(tags);
        self
    }

    #[must_use]
    pub fn with_ingredients<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.ingredients.extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_macros(mut self, macros: Macros) -> Self {
        self.macros = macros;
        self
    }

    #[must_use]
    pub fn with_sodium(mut self, milligrams: f64) -> Self {
        self.sodium_milligrams = milligrams;
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diet_tags(&self) -> &BTreeSet<DietTag> {
        &self.diet_tags
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn macros(&self) -> &Macros {
        &self.macros
    }

    pub fn sodium_milligrams(&self) -> f64 {
        self.sodium_milligrams
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether the meal satisfies every tag in `required`.
    pub fn satisfies(&self, required: &BTreeSet<DietTag>) -> bool {
        required.is_subset(&self.diet_tags)
    }

    /// First ingredient containing `needle`, compared case-insensitively.
    pub fn find_ingredient(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.ingredients
            .iter()
            .find(|i| i.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// Actual value for a soft target, if the record carries it.
    pub fn nutrient(&self, kind: TargetKind) -> Option<f64> {
        match kind {
            TargetKind::Sodium => Some(self.sodium_milligrams),
            _ => self.macros.amount(kind),
        }
    }
}
