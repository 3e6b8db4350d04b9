pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod recommender;
pub mod state;

pub use error::{MealMdError, Result};
pub use models::{MealRecord, PreferenceProfile, ScoredMeal};
pub use recommender::{Recommender, recommend};
pub use state::MealCatalog;
