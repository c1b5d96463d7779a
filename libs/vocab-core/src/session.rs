//! Quiz session controller.
//!
//! A session owns the deck, the lesson selection and the current question.
//! It is driven by [`Command`]s and reports through a [`Renderer`], so it
//! has no knowledge of any particular UI.

use crate::error::SessionError;
use crate::matching::{check_answer, MatchResult};
use crate::score::ScoreStore;
use crate::selection::{get_strategy, select_next, SelectionMode, SelectionStrategy};
use crate::types::{Deck, EntryId, LessonTag, VocabularyEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// A prompt is shown and an answer is expected.
    Displaying,
    /// A result is shown and the learner has to continue.
    AwaitingContinue,
}

/// User actions consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SubmitAnswer(String),
    Continue,
    LessonToggled { lesson: LessonTag, enabled: bool },
    SelectAll,
    DeselectAll,
    SetSelectionMode(SelectionMode),
}

/// Outcome of one checked answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub entry: EntryId,
    pub prompt: String,
    /// Raw stored answer, shown as the correct answer.
    pub answer: String,
    pub phonetic: String,
    pub result: MatchResult,
    pub points: i64,
    /// Score after applying `points`.
    pub score: i64,
}

impl CheckOutcome {
    pub fn is_correct(&self) -> bool {
        self.result.is_correct
    }
}

/// Display side of the quiz.
pub trait Renderer {
    /// Show a new prompt and clear the answer input.
    fn show_prompt(&mut self, entry: &VocabularyEntry);

    /// Show the result of a check together with the continue affordance.
    fn show_result(&mut self, outcome: &CheckOutcome);

    /// Hide the result and the continue affordance.
    fn clear_result(&mut self);

    fn show_score(&mut self, score: i64);
}

/// A running quiz.
pub struct Session<S, R = StdRng> {
    deck: Deck,
    lessons: Vec<(LessonTag, bool)>,
    pool: Vec<EntryId>,
    current: Option<EntryId>,
    state: SessionState,
    mode: SelectionMode,
    strategy: Box<dyn SelectionStrategy>,
    store: S,
    rng: R,
}

impl<S: ScoreStore> Session<S, StdRng> {
    /// Create a session over `deck` with every lesson enabled.
    pub fn new(deck: Deck, store: S) -> Self {
        Self::with_rng(deck, store, StdRng::from_os_rng())
    }
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    /// Create a session drawing questions with the given random source.
    pub fn with_rng(deck: Deck, store: S, rng: R) -> Self {
        let lessons = deck.lessons().into_iter().map(|l| (l, true)).collect();
        let pool = deck.pool(|_| true);
        let mode = SelectionMode::default();

        Self {
            deck,
            lessons,
            pool,
            current: None,
            state: SessionState::Displaying,
            mode,
            strategy: get_strategy(mode),
            store,
            rng,
        }
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Show the persisted score and the first question.
    pub fn start(&mut self, renderer: &mut dyn Renderer) -> Result<(), SessionError> {
        renderer.show_score(self.store.get()?);
        self.present_next(renderer)
    }

    /// Apply one user command.
    pub fn handle(
        &mut self,
        command: Command,
        renderer: &mut dyn Renderer,
    ) -> Result<(), SessionError> {
        match command {
            Command::SubmitAnswer(typed) => self.submit(&typed, renderer),
            Command::Continue => self.advance(renderer),
            Command::LessonToggled { lesson, enabled } => {
                let slot = self
                    .lessons
                    .iter_mut()
                    .find(|(l, _)| *l == lesson)
                    .ok_or(SessionError::UnknownLesson(lesson))?;
                slot.1 = enabled;
                self.lessons_changed(renderer)
            }
            Command::SelectAll => {
                self.lessons.iter_mut().for_each(|(_, on)| *on = true);
                self.lessons_changed(renderer)
            }
            Command::DeselectAll => {
                self.lessons.iter_mut().for_each(|(_, on)| *on = false);
                self.lessons_changed(renderer)
            }
            Command::SetSelectionMode(mode) => {
                self.set_mode(mode);
                Ok(())
            }
        }
    }

    fn submit(&mut self, typed: &str, renderer: &mut dyn Renderer) -> Result<(), SessionError> {
        if self.state != SessionState::Displaying {
            tracing::debug!("answer submitted while awaiting continue, ignoring");
            return Ok(());
        }

        let id = self.current.ok_or(SessionError::NoCurrentQuestion)?;
        if self.pool.is_empty() {
            return Err(SessionError::NoQuestionsAvailable);
        }
        let entry = self.deck.get(id).ok_or(SessionError::NoCurrentQuestion)?;

        let result = check_answer(typed, &entry.answer);
        let points = result.points();
        tracing::debug!(
            entry = id.0,
            correct = result.is_correct,
            exact = result.is_exact,
            points,
            "checked answer"
        );

        let prompt = entry.prompt.clone();
        let answer = entry.answer.clone();
        let phonetic = entry.phonetic.clone();
        let score = self.store.add(points)?;

        if let Some(entry) = self.deck.get_mut(id) {
            if result.is_correct {
                entry.correct_count += 1;
            } else {
                entry.wrong_count += 1;
            }
        }

        let outcome = CheckOutcome {
            entry: id,
            prompt,
            answer,
            phonetic,
            result,
            points,
            score,
        };
        self.state = SessionState::AwaitingContinue;
        renderer.show_result(&outcome);
        renderer.show_score(score);
        Ok(())
    }

    fn advance(&mut self, renderer: &mut dyn Renderer) -> Result<(), SessionError> {
        if self.state != SessionState::AwaitingContinue {
            tracing::debug!("continue requested while displaying, ignoring");
            return Ok(());
        }
        self.present_next(renderer)
    }

    fn lessons_changed(&mut self, renderer: &mut dyn Renderer) -> Result<(), SessionError> {
        let enabled: Vec<LessonTag> = self
            .lessons
            .iter()
            .filter(|(_, on)| *on)
            .map(|(l, _)| *l)
            .collect();
        self.pool = self.deck.pool(|l| enabled.contains(&l));
        tracing::debug!(
            lessons = enabled.len(),
            pool = self.pool.len(),
            "lesson selection changed"
        );

        self.present_next(renderer)
    }

    /// Draw and show the next question, replacing any shown result. On
    /// failure the screen and the round state are left untouched, and
    /// answers are refused until the pool is refilled.
    fn present_next(&mut self, renderer: &mut dyn Renderer) -> Result<(), SessionError> {
        let next = select_next(
            &self.deck,
            &self.pool,
            self.current,
            self.strategy.as_ref(),
            &mut self.rng,
        )?;
        self.current = Some(next);
        self.state = SessionState::Displaying;
        renderer.clear_result();
        if let Some(entry) = self.deck.get(next) {
            renderer.show_prompt(entry);
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        self.strategy = get_strategy(mode);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.current.and_then(|id| self.deck.get(id))
    }

    pub fn current_id(&self) -> Option<EntryId> {
        self.current
    }

    /// Entries of the enabled lessons.
    pub fn pool(&self) -> &[EntryId] {
        &self.pool
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Lesson tags with their enabled flag, in first-appearance order.
    pub fn lessons(&self) -> &[(LessonTag, bool)] {
        &self.lessons
    }

    pub fn is_lesson_enabled(&self, lesson: LessonTag) -> Option<bool> {
        self.lessons
            .iter()
            .find(|(l, _)| *l == lesson)
            .map(|(_, on)| *on)
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn score(&self) -> Result<i64, SessionError> {
        Ok(self.store.get()?)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
