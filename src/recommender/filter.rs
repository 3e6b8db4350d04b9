use std::fmt;

use tracing::debug;

use crate::models::{DietTag, MealRecord, PreferenceProfile};
use crate::recommender::config::SodiumPolicy;

/// Why a meal was dropped by a hard constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Exclusion {
    /// Required tags the meal does not carry.
    MissingDietTags(Vec<DietTag>),
    /// An avoided term matched one of the ingredients.
    AvoidedIngredient { avoid: String, ingredient: String },
    /// Sodium above a hard limit.
    SodiumOverLimit { sodium: f64, limit: f64 },
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::MissingDietTags(tags) => {
                let names: Vec<&str> = tags.iter().map(DietTag::label).collect();
                write!(f, "not {}", names.join(", "))
            }
            Exclusion::AvoidedIngredient { avoid, ingredient } => {
                write!(f, "contains '{}' ({})", avoid, ingredient)
            }
            Exclusion::SodiumOverLimit { sodium, limit } => {
                write!(f, "sodium {:.0} mg over limit {:.0} mg", sodium, limit)
            }
        }
    }
}

/// First hard constraint `meal` violates, or `None` if it is a candidate.
///
/// Rules are checked in order: diet tags, avoided ingredients, then sodium
/// (only under [`SodiumPolicy::Hard`]).
pub fn exclusion_reason(
    meal: &MealRecord,
    profile: &PreferenceProfile,
    policy: SodiumPolicy,
) -> Option<Exclusion> {
    let required = profile.required_diet_tags();
    if !meal.satisfies(required) {
        let missing = required
            .difference(meal.diet_tags())
            .copied()
            .collect();
        return Some(Exclusion::MissingDietTags(missing));
    }

    for avoid in profile.avoid_ingredients() {
        if let Some(ingredient) = meal.find_ingredient(avoid) {
            return Some(Exclusion::AvoidedIngredient {
                avoid: avoid.clone(),
                ingredient: ingredient.to_string(),
            });
        }
    }

    if policy == SodiumPolicy::Hard {
        if let Some(limit) = profile.sodium_limit_milligrams() {
            if meal.sodium_milligrams() > limit {
                return Some(Exclusion::SodiumOverLimit {
                    sodium: meal.sodium_milligrams(),
                    limit,
                });
            }
        }
    }

    None
}

/// Meals that pass every hard constraint, in catalog order.
pub fn filter<'a>(
    meals: &'a [MealRecord],
    profile: &PreferenceProfile,
    policy: SodiumPolicy,
) -> Vec<&'a MealRecord> {
    meals
        .iter()
        .filter(|meal| match exclusion_reason(meal, profile, policy) {
            Some(reason) => {
                debug!(meal = meal.id(), %reason, "excluded");
                false
            }
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Macros};

    fn sample_meals() -> Vec<MealRecord> {
        vec![
            MealRecord::new("tofu", "Tofu Stir-Fry")
                .with_tags([DietTag::Vegetarian, DietTag::Vegan])
                .with_ingredients(["extra-firm tofu", "brown rice", "garlic-ginger sauce"])
                .with_macros(Macros::new(600.0, 36.0, 70.0, 16.0))
                .with_sodium(420.0),
            MealRecord::new("shrimp", "Shrimp Rice Bowl")
                .with_tags([DietTag::Pescatarian, DietTag::GlutenFree])
                .with_ingredients(["Shrimp 6 oz", "jasmine rice", "lime"])
                .with_macros(Macros::new(600.0, 42.0, 64.0, 14.0))
                .with_sodium(640.0),
            MealRecord::new("yogurt", "Greek Yogurt Power Bowl")
                .with_tags([DietTag::Vegetarian, DietTag::GlutenFree])
                .with_ingredients(["plain Greek yogurt", "walnuts", "honey"])
                .with_macros(Macros::new(580.0, 42.0, 48.0, 20.0))
                .with_sodium(180.0),
        ]
    }

    fn ids(meals: &[&MealRecord]) -> Vec<String> {
        meals.iter().map(|m| m.id().to_string()).collect()
    }

    #[test]
    fn test_empty_profile_keeps_everything_in_order() {
        let meals = sample_meals();
        let profile = PreferenceProfile::builder().goal(Goal::Maintain).build().unwrap();
        let kept = filter(&meals, &profile, SodiumPolicy::Hard);
        assert_eq!(ids(&kept), vec!["tofu", "shrimp", "yogurt"]);
    }

    #[test]
    fn test_required_tags_must_all_be_present() {
        let meals = sample_meals();
        let profile = PreferenceProfile::builder()
            .goal(Goal::Maintain)
            .require_tag(DietTag::Vegetarian)
            .require_tag(DietTag::GlutenFree)
            .build()
            .unwrap();
        let kept = filter(&meals, &profile, SodiumPolicy::Hard);
        assert_eq!(ids(&kept), vec!["yogurt"]);

        let reason = exclusion_reason(&meals[0], &profile, SodiumPolicy::Hard);
        assert_eq!(
            reason,
            Some(Exclusion::MissingDietTags(vec![DietTag::GlutenFree]))
        );
    }

    #[test]
    fn test_avoid_matches_substring_case_insensitively() {
        let meals = sample_meals();
        let profile = PreferenceProfile::builder()
            .goal(Goal::Maintain)
            .avoid("SHRIMP")
            .avoid("nut")
            .build()
            .unwrap();
        let kept = filter(&meals, &profile, SodiumPolicy::Hard);
        assert_eq!(ids(&kept), vec!["tofu"]);

        let reason = exclusion_reason(&meals[2], &profile, SodiumPolicy::Hard);
        assert_eq!(
            reason,
            Some(Exclusion::AvoidedIngredient {
                avoid: "nut".to_string(),
                ingredient: "walnuts".to_string(),
            })
        );
    }

    #[test]
    fn test_sodium_limit_only_excludes_under_hard_policy() {
        let meals = sample_meals();
        let profile = PreferenceProfile::builder()
            .goal(Goal::Maintain)
            .sodium_limit(420.0)
            .build()
            .unwrap();

        // Equal to the limit passes.
        let hard = filter(&meals, &profile, SodiumPolicy::Hard);
        assert_eq!(ids(&hard), vec!["tofu", "yogurt"]);

        let soft = filter(&meals, &profile, SodiumPolicy::Soft);
        assert_eq!(soft.len(), 3);
    }

    #[test]
    fn test_no_survivors_is_empty_not_error() {
        let meals = sample_meals();
        let profile = PreferenceProfile::builder()
            .goal(Goal::Maintain)
            .require_tag(DietTag::Keto)
            .build()
            .unwrap();
        assert!(filter(&meals, &profile, SodiumPolicy::Hard).is_empty());
    }

    #[test]
    fn test_exclusion_display() {
        let reason = Exclusion::SodiumOverLimit {
            sodium: 640.0,
            limit: 500.0,
        };
        assert_eq!(reason.to_string(), "sodium 640 mg over limit 500 mg");
    }
}
