use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealMdError {
    #[error("top-N must be a positive integer, got {0}")]
    InvalidTopN(usize),

    #[error("Preference profile has no goal")]
    MissingGoal,

    #[error("Invalid {field} target: {value} (must be a finite, non-negative number)")]
    InvalidTarget { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} (must be a finite number above zero)")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("Duplicate meal id in catalog: {0}")]
    DuplicateMealId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MealMdError>;
