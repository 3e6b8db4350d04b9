use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{MealRecord, PreferenceProfile, ProfileBuilder};
use crate::state::MealCatalog;

/// File name for remembered answers, placed in the home directory.
const PREFS_FILE_NAME: &str = ".mealmdrc";

/// Load meal records from a JSON array.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<MealRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a catalog from JSON, or the built-in one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<MealCatalog> {
    match path {
        Some(path) => {
            let catalog = MealCatalog::new(load_meals(path)?)?;
            debug!(path = %path.display(), meals = catalog.len(), "loaded catalog");
            Ok(catalog)
        }
        None => Ok(MealCatalog::builtin()),
    }
}

/// Where remembered answers live: `$HOME/.mealmdrc`, else the working directory.
pub fn default_prefs_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(PREFS_FILE_NAME)
}

/// Read the answers from the previous session.
///
/// A missing file yields `None`. An unreadable or invalid file is logged and
/// also yields `None`, so a stale file never blocks the wizard.
pub fn load_saved_answers<P: AsRef<Path>>(path: P) -> Option<ProfileBuilder> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read saved answers");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(answers) => Some(answers),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid saved answers");
            None
        }
    }
}

/// Remember a profile for next time.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &PreferenceProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Delete remembered answers. Returns whether a file was removed.
pub fn forget_profile<P: AsRef<Path>>(path: P) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietTag, Goal, TargetKind};
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_load_meals_from_json() {
        let json = r#"[
            {"id": "bowl", "name": "Bowl", "diet_tags": ["vegan"], "ingredients": ["rice"],
             "macros": {"calories": 500, "protein_grams": 20}, "sodium_milligrams": 300, "notes": "n"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        let meal = &catalog.meals()[0];
        assert_eq!(meal.name(), "Bowl");
        assert!(meal.diet_tags().contains(&DietTag::Vegan));
        assert_eq!(meal.macros().carb_grams, None);
    }

    #[test]
    fn test_load_catalog_without_path_is_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), MealCatalog::builtin().len());
    }

    #[test]
    fn test_profile_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let profile = PreferenceProfile::builder()
            .goal(Goal::LoseWeight)
            .require_tag(DietTag::Vegetarian)
            .avoid("Peanut")
            .target(TargetKind::Calories, 550.0)
            .sodium_limit(600.0)
            .build()
            .unwrap();
        save_profile(&path, &profile).unwrap();

        let answers = load_saved_answers(&path).unwrap();
        assert_eq!(answers.build().unwrap(), profile);
    }

    #[test]
    fn test_missing_or_corrupt_answers_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        assert!(load_saved_answers(&path).is_none());

        fs::write(&path, "{not json").unwrap();
        assert!(load_saved_answers(&path).is_none());
    }

    #[test]
    fn test_forget_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{}").unwrap();

        assert!(forget_profile(&path).unwrap());
        assert!(!forget_profile(&path).unwrap());
    }
}
