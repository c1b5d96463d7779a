//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};

/// Lesson tag of an entry. `None` marks a lesson field that was not numeric.
pub type LessonTag = Option<i64>;

/// Stable identifier of an entry: its position in the parsed deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub usize);

/// One prompt/answer pair parsed from the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Source-language term shown to the learner.
    pub prompt: String,
    /// Raw target-language field; may hold annotations and slash variants.
    pub answer: String,
    pub unit: Option<i64>,
    pub lesson: LessonTag,
    pub phonetic: String,
    pub correct_count: u32,
    pub wrong_count: u32,
}

impl VocabularyEntry {
    /// Create an entry with fresh statistics.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            unit: None,
            lesson: None,
            phonetic: String::new(),
            correct_count: 0,
            wrong_count: 0,
        }
    }

    pub fn with_lesson(mut self, lesson: LessonTag) -> Self {
        self.lesson = lesson;
        self
    }
}

/// Per-lesson progress summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStats {
    pub lesson: LessonTag,
    pub entries: usize,
    /// Entries answered correctly at least once.
    pub mastered: usize,
    pub correct: u32,
    pub wrong: u32,
}

/// The full ordered set of entries loaded at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    entries: Vec<VocabularyEntry>,
}

impl Deck {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&VocabularyEntry> {
        self.entries.get(id.0)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut VocabularyEntry> {
        self.entries.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &VocabularyEntry)> {
        self.entries.iter().enumerate().map(|(idx, e)| (EntryId(idx), e))
    }

    /// Distinct lesson tags in order of first appearance.
    pub fn lessons(&self) -> Vec<LessonTag> {
        let mut lessons = Vec::new();
        for entry in &self.entries {
            if !lessons.contains(&entry.lesson) {
                lessons.push(entry.lesson);
            }
        }
        lessons
    }

    /// Ids of all entries whose lesson satisfies `enabled`.
    pub fn pool(&self, enabled: impl Fn(LessonTag) -> bool) -> Vec<EntryId> {
        self.iter()
            .filter(|(_, e)| enabled(e.lesson))
            .map(|(id, _)| id)
            .collect()
    }

    /// Progress per lesson, in lesson order.
    pub fn lesson_stats(&self) -> Vec<LessonStats> {
        self.lessons()
            .into_iter()
            .map(|lesson| {
                let mut stats = LessonStats {
                    lesson,
                    entries: 0,
                    mastered: 0,
                    correct: 0,
                    wrong: 0,
                };
                for entry in self.entries.iter().filter(|e| e.lesson == lesson) {
                    stats.entries += 1;
                    if entry.correct_count > 0 {
                        stats.mastered += 1;
                    }
                    stats.correct += entry.correct_count;
                    stats.wrong += entry.wrong_count;
                }
                stats
            })
            .collect()
    }
}
