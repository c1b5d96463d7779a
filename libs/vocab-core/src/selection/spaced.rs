//! Least-mastered-first selection.
//!
//! Only the candidates with the lowest correct count are eligible, so an
//! entry never answered correctly always comes before one answered
//! correctly once, and so on.

use super::SelectionStrategy;
use crate::types::{Deck, EntryId};

#[derive(Debug, Clone, Copy, Default)]
pub struct Spaced;

impl SelectionStrategy for Spaced {
    fn name(&self) -> &'static str {
        "spaced"
    }

    fn eligible(&self, deck: &Deck, candidates: Vec<EntryId>) -> Vec<EntryId> {
        let correct_count = |id: &EntryId| deck.get(*id).map(|e| e.correct_count);
        let Some(lowest) = candidates.iter().filter_map(correct_count).min() else {
            return candidates;
        };

        candidates
            .into_iter()
            .filter(|id| correct_count(id) == Some(lowest))
            .collect()
    }
}
