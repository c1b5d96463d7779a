//! Core vocabulary quiz library shared by the quiz front ends.
//!
//! Provides:
//! - Delimited word list parser with malformed-row recovery
//! - Answer normalization and slash-variant expansion
//! - Question selection strategies (spaced, uniform)
//! - Session controller driven by explicit commands
//! - Shared types (VocabularyEntry, Deck, EntryId, etc.)

pub mod error;
pub mod matching;
pub mod parser;
pub mod score;
pub mod selection;
pub mod session;
pub mod types;

pub use error::{MalformedRowError, ParseError, Result, SessionError, StoreError};
pub use matching::{check_answer, expand_variants, normalize_answer, MatchResult};
pub use parser::{parse, ColumnLabels, ParsedWordList};
pub use score::{MemoryScoreStore, ScoreStore};
pub use selection::{get_strategy, select_next, SelectionMode, SelectionStrategy};
pub use session::{CheckOutcome, Command, Renderer, Session, SessionState};
pub use types::{Deck, EntryId, LessonStats, LessonTag, VocabularyEntry};
