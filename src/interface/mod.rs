pub mod prompts;
pub mod render;
pub mod wizard;

pub use prompts::{
    StepOutcome, parse_amount, parse_ingredient_list, prompt_avoid_ingredients, prompt_diet_tags,
    prompt_goal, prompt_target, suggest_ingredient,
};
pub use render::{
    display_meal_list, display_recommendations, explain, format_macros, render_json, write_csv,
};
pub use wizard::{WizardStep, run_wizard};
