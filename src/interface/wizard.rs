use crate::error::Result;
use crate::interface::prompts::{
    StepOutcome, prompt_avoid_ingredients, prompt_diet_tags, prompt_goal, prompt_target,
};
use crate::models::{PreferenceProfile, ProfileBuilder, TargetKind};
use crate::state::MealCatalog;

/// One question of the wizard, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Goal,
    DietTags,
    AvoidIngredients,
    Calories,
    Protein,
    Carbs,
    Fat,
    SodiumLimit,
}

impl WizardStep {
    const ORDER: [WizardStep; 8] = [
        WizardStep::Goal,
        WizardStep::DietTags,
        WizardStep::AvoidIngredients,
        WizardStep::Calories,
        WizardStep::Protein,
        WizardStep::Carbs,
        WizardStep::Fat,
        WizardStep::SodiumLimit,
    ];

    pub const FIRST: WizardStep = WizardStep::Goal;

    fn index(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Step after this one, `None` once the wizard is complete.
    pub fn next(self) -> Option<WizardStep> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// Step before this one; the first step has none.
    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    /// The numeric target this step asks for, if any.
    pub fn target_kind(self) -> Option<TargetKind> {
        match self {
            WizardStep::Calories => Some(TargetKind::Calories),
            WizardStep::Protein => Some(TargetKind::Protein),
            WizardStep::Carbs => Some(TargetKind::Carbs),
            WizardStep::Fat => Some(TargetKind::Fat),
            WizardStep::SodiumLimit => Some(TargetKind::Sodium),
            _ => None,
        }
    }

    /// Where to go after `outcome`; "back" on the first step stays put.
    pub fn advance<T>(self, outcome: &StepOutcome<T>) -> Option<WizardStep> {
        match outcome {
            StepOutcome::Answer(_) => self.next(),
            StepOutcome::Back => Some(self.prev().unwrap_or(self)),
        }
    }
}

/// Store a numeric answer on the draft.
fn set_target(answers: &mut ProfileBuilder, kind: TargetKind, value: Option<f64>) {
    match kind {
        TargetKind::Sodium => answers.sodium_limit_milligrams = value,
        _ => answers.macro_targets.set(kind, value),
    }
}

fn current_target(answers: &ProfileBuilder, kind: TargetKind) -> Option<f64> {
    match kind {
        TargetKind::Sodium => answers.sodium_limit_milligrams,
        _ => answers.macro_targets.get(kind),
    }
}

/// Ask every question in order, with back navigation, and build the profile.
///
/// `saved` pre-fills defaults from the previous session.
pub fn run_wizard(catalog: &MealCatalog, saved: Option<ProfileBuilder>) -> Result<PreferenceProfile> {
    let mut answers = saved.unwrap_or_default();
    let known_ingredients = catalog.ingredient_names();
    let mut step = Some(WizardStep::FIRST);

    while let Some(current) = step {
        step = match current {
            WizardStep::Goal => {
                answers.goal = Some(prompt_goal(answers.goal)?);
                current.next()
            }
            WizardStep::DietTags => {
                let outcome = prompt_diet_tags(&answers.required_diet_tags)?;
                let next = current.advance(&outcome);
                if let StepOutcome::Answer(tags) = outcome {
                    answers.required_diet_tags = tags;
                }
                next
            }
            WizardStep::AvoidIngredients => {
                let outcome = prompt_avoid_ingredients(&answers.avoid_ingredients, &known_ingredients)?;
                let next = current.advance(&outcome);
                if let StepOutcome::Answer(terms) = outcome {
                    answers.avoid_ingredients = terms;
                }
                next
            }
            _ => {
                let Some(kind) = current.target_kind() else {
                    break;
                };
                let outcome = prompt_target(kind, current_target(&answers, kind))?;
                let next = current.advance(&outcome);
                if let StepOutcome::Answer(value) = outcome {
                    set_target(&mut answers, kind, value);
                }
                next
            }
        };
    }

    answers.build()
}
