pub mod config;
pub mod constants;
pub mod filter;
pub mod ranking;
pub mod scoring;

pub use config::{ScoringConfig, SodiumPolicy};
pub use constants::*;
pub use filter::{Exclusion, exclusion_reason, filter};
pub use ranking::{Recommender, recommend};
pub use scoring::{score, score_breakdown};
