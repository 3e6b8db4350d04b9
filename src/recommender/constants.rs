/// Meals shown when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 3;

/// Weight of the target the goal emphasizes (protein for bulking, calories for cutting).
pub const PRIMARY_TARGET_WEIGHT: f64 = 2.0;

/// Weight of every other target.
pub const BASE_TARGET_WEIGHT: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Deviation at or below which a target counts as "on target" in explanations.
pub const CLOSE_MATCH_TOLERANCE: f64 = 0.10;

/// Minimum Jaro-Winkler similarity for a "did you mean" ingredient suggestion.
pub const SUGGESTION_SIMILARITY: f64 = 0.85;
