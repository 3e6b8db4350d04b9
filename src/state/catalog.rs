use std::collections::HashSet;

use crate::error::{MealMdError, Result};
use crate::models::MealRecord;
use crate::state::builtin::builtin_meals;

/// Read-only collection of meal records, loaded once per process.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    meals: Vec<MealRecord>,
}

impl MealCatalog {
    /// Create a catalog, rejecting duplicate ids.
    pub fn new(meals: Vec<MealRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for meal in &meals {
            if !seen.insert(meal.id()) {
                return Err(MealMdError::DuplicateMealId(meal.id().to_string()));
            }
        }
        Ok(Self { meals })
    }

    /// The meals that ship with the tool.
    pub fn builtin() -> Self {
        Self {
            meals: builtin_meals(),
        }
    }

    /// Get a meal by id.
    pub fn get(&self, id: &str) -> Option<&MealRecord> {
        self.meals.iter().find(|m| m.id() == id)
    }

    /// All meals in catalog order.
    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    /// Distinct lowercase ingredient names, in first-seen order.
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.meals
            .iter()
            .flat_map(|m| m.ingredients())
            .map(|i| i.to_lowercase())
            .filter(|i| seen.insert(i.clone()))
            .collect()
    }

    /// Count of meals in the catalog.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Check if the catalog has no meals.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
