mod builtin;
mod catalog;
mod persistence;

pub use catalog::MealCatalog;
pub use persistence::{
    default_prefs_path, forget_profile, load_catalog, load_meals, load_saved_answers, save_profile,
};
