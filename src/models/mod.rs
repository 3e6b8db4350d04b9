mod meal;
mod profile;
mod scored;

pub use meal::{DietTag, Macros, MealRecord};
pub use profile::{Goal, MacroTargets, PreferenceProfile, ProfileBuilder, TargetKind};
pub use scored::{DeviationTerm, ScoreBreakdown, ScoredMeal};
