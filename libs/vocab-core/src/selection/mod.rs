//! Question selection strategies.

pub mod spaced;
pub mod uniform;

use crate::error::SessionError;
use crate::types::{Deck, EntryId};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Selection mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Spaced,
    Uniform,
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::Spaced
    }
}

impl SelectionMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaced => "spaced",
            Self::Uniform => "uniform",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "spaced" => Some(Self::Spaced),
            "uniform" => Some(Self::Uniform),
            _ => None,
        }
    }
}

/// Trait for question selection strategies.
pub trait SelectionStrategy: Send + Sync {
    /// Strategy identifier.
    fn name(&self) -> &'static str;

    /// Narrow the candidate set before the random draw.
    fn eligible(&self, deck: &Deck, candidates: Vec<EntryId>) -> Vec<EntryId>;
}

/// Get strategy for a mode.
pub fn get_strategy(mode: SelectionMode) -> Box<dyn SelectionStrategy> {
    match mode {
        SelectionMode::Spaced => Box::new(spaced::Spaced),
        SelectionMode::Uniform => Box::new(uniform::Uniform),
    }
}

/// Pick the next entry to present from `pool`.
///
/// The previously shown entry is excluded whenever the pool holds more than
/// one entry.
pub fn select_next<R: Rng + ?Sized>(
    deck: &Deck,
    pool: &[EntryId],
    previous: Option<EntryId>,
    strategy: &dyn SelectionStrategy,
    rng: &mut R,
) -> Result<EntryId, SessionError> {
    if pool.is_empty() {
        return Err(SessionError::NoQuestionsAvailable);
    }

    let mut candidates = pool.to_vec();
    if candidates.len() > 1 {
        candidates.retain(|id| Some(*id) != previous);
    }

    let candidates = strategy.eligible(deck, candidates);
    let picked = candidates
        .choose(rng)
        .copied()
        .ok_or(SessionError::NoQuestionsAvailable)?;

    tracing::debug!(
        strategy = strategy.name(),
        candidates = candidates.len(),
        picked = picked.0,
        "selected next question"
    );
    Ok(picked)
}
