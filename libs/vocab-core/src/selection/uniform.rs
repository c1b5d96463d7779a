//! Uniform selection: every candidate is equally likely.

use super::SelectionStrategy;
use crate::types::{Deck, EntryId};

#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl SelectionStrategy for Uniform {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn eligible(&self, _deck: &Deck, candidates: Vec<EntryId>) -> Vec<EntryId> {
        candidates
    }
}
