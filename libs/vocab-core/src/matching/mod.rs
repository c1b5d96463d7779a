//! Answer checking for typed answers.
//!
//! A stored answer is expanded into its acceptable variants and the typed
//! answer is correct when its normalized form is one of them.

pub mod normalize;
pub mod variants;

pub use normalize::normalize_answer;
pub use variants::expand_variants;

use serde::{Deserialize, Serialize};

/// Points for a correct answer typed exactly as stored.
pub const EXACT_MATCH_POINTS: i64 = 5;
/// Points for a correct answer that only matched after normalization.
pub const MATCH_POINTS: i64 = 1;
/// Points for a wrong answer.
pub const MISS_POINTS: i64 = -1;

/// Result of checking a typed answer against a stored answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Correct and typed character for character as stored.
    pub is_exact: bool,
    /// Normalized typed answer.
    pub typed_normalized: String,
    /// All accepted normalized variants of the stored answer.
    pub variants: Vec<String>,
}

impl MatchResult {
    /// Score change earned by this answer.
    pub fn points(&self) -> i64 {
        match (self.is_correct, self.is_exact) {
            (true, true) => EXACT_MATCH_POINTS,
            (true, false) => MATCH_POINTS,
            (false, _) => MISS_POINTS,
        }
    }
}

/// Check a typed answer against the raw stored answer field.
pub fn check_answer(typed: &str, stored: &str) -> MatchResult {
    let variants = expand_variants(stored);
    let typed_normalized = normalize_answer(typed);
    let is_correct = variants.contains(&typed_normalized);

    MatchResult {
        is_correct,
        is_exact: is_correct && typed == stored,
        typed_normalized,
        variants,
    }
}
