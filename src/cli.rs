use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::recommender::constants::DEFAULT_TOP_N;
use crate::recommender::SodiumPolicy;

/// MealMD — a step-by-step terminal helper that suggests meals for your goals.
#[derive(Parser, Debug)]
#[command(name = "mealmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Meal catalog JSON file (defaults to the built-in meals).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Scoring configuration JSON file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where remembered answers are kept (defaults to ~/.mealmdrc).
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a few questions and get ranked meal suggestions.
    Recommend(RecommendArgs),

    /// List every meal in the catalog.
    Catalog,

    /// Delete remembered answers.
    Forget,
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend(RecommendArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// How many meals to show.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Seed for deterministic tie-breaking between equally scored meals.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print recommendations as JSON and exit.
    #[arg(long)]
    pub json: bool,

    /// Also write recommendations to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Don't remember answers for next time.
    #[arg(long)]
    pub no_save: bool,

    /// Treat the sodium limit as a hard filter, a soft target, or a ranking ceiling.
    #[arg(long, value_enum)]
    pub sodium_policy: Option<SodiumPolicy>,
}

impl Default for RecommendArgs {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_N,
            seed: None,
            json: false,
            csv: None,
            no_save: false,
            sodium_policy: None,
        }
    }
}
