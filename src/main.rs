use std::path::Path;

use clap::Parser;
use tracing::info;

use meal_md_rs::cli::{Cli, Command, RecommendArgs};
use meal_md_rs::error::Result;
use meal_md_rs::interface::{
    display_meal_list, display_recommendations, render_json, run_wizard, write_csv,
};
use meal_md_rs::logging::init_logging;
use meal_md_rs::recommender::{Recommender, ScoringConfig};
use meal_md_rs::state::{
    default_prefs_path, forget_profile, load_catalog, load_saved_answers, save_profile,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prefs_path = cli.prefs.clone().unwrap_or_else(default_prefs_path);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend(args) => {
            cmd_recommend(cli.catalog.as_deref(), cli.config.as_deref(), &prefs_path, &args)
        }
        Command::Catalog => cmd_catalog(cli.catalog.as_deref()),
        Command::Forget => cmd_forget(&prefs_path),
    }
}

/// Run the wizard and show ranked meals.
fn cmd_recommend(
    catalog_path: Option<&Path>,
    config_path: Option<&Path>,
    prefs_path: &Path,
    args: &RecommendArgs,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    info!(meals = catalog.len(), "catalog ready");

    let mut config = match config_path {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    if let Some(policy) = args.sodium_policy {
        config.sodium_policy = policy;
    }

    println!("=== MealMD (step-by-step) ===");
    println!("Pick an option for each question. Choose '← Back' or type 'b' to revisit the previous one.");
    println!();

    let saved = load_saved_answers(prefs_path);
    let profile = run_wizard(&catalog, saved)?;

    if !args.no_save {
        save_profile(prefs_path, &profile)?;
        info!(path = %prefs_path.display(), "saved answers");
    }

    let results = Recommender::new(&catalog)
        .with_config(config)
        .with_tie_seed(args.seed)
        .recommend(&profile, args.top)?;

    if let Some(path) = &args.csv {
        write_csv(&results, path)?;
        info!(count = results.len(), path = %path.display(), "wrote csv");
    }

    if args.json {
        println!("{}", render_json(&results)?);
    } else {
        display_recommendations(&results, &profile);
    }

    Ok(())
}

/// List the catalog.
fn cmd_catalog(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    display_meal_list(catalog.meals());
    Ok(())
}

/// Delete remembered answers.
fn cmd_forget(prefs_path: &Path) -> Result<()> {
    if forget_profile(prefs_path)? {
        println!("Forgot saved answers at {}.", prefs_path.display());
    } else {
        println!("No saved answers at {}.", prefs_path.display());
    }
    Ok(())
}
