//! End-to-end quiz flow tests: word list text in, scored rounds out.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_core::{
    parse, CheckOutcome, ColumnLabels, Command, Deck, MemoryScoreStore, Renderer, SelectionMode,
    Session, SessionError, SessionState, VocabularyEntry,
};

const WORDS: &str = "\
DEUTSCH;FRANZÖSISCH;Unité;Leçon;PHONETIK
Hund;le chien;1;1;
Katze;le chat (animal);1;1;
Freund;l'ami/e;1;2;
fallen;tomber / chuter;2;2;
kaputt;cassé;2
vielleicht;peut-être;2;3;
";

#[derive(Default)]
struct Screen {
    prompt: Option<String>,
    results: Vec<CheckOutcome>,
    score: Option<i64>,
}

impl Renderer for Screen {
    fn show_prompt(&mut self, entry: &VocabularyEntry) {
        self.prompt = Some(entry.prompt.clone());
    }

    fn show_result(&mut self, outcome: &CheckOutcome) {
        self.results.push(outcome.clone());
    }

    fn clear_result(&mut self) {}

    fn show_score(&mut self, score: i64) {
        self.score = Some(score);
    }
}

fn load_session(seed: u64) -> Session<MemoryScoreStore> {
    let parsed = parse(WORDS, &ColumnLabels::default()).unwrap();
    Session::with_rng(
        Deck::new(parsed.entries),
        MemoryScoreStore::default(),
        StdRng::seed_from_u64(seed),
    )
}

/// Accepted answer for each prompt in WORDS.
fn answer_for(prompt: &str) -> &'static str {
    match prompt {
        "Hund" => "le chien",
        "Katze" => "le chat",
        "Freund" => "l’amie",
        "fallen" => "chuter",
        "vielleicht" => "Peut-etre",
        other => panic!("unexpected prompt {other}"),
    }
}

#[test]
fn malformed_row_is_reported_and_skipped() {
    let parsed = parse(WORDS, &ColumnLabels::default()).unwrap();
    assert_eq!(parsed.entries.len(), 5);
    assert_eq!(parsed.malformed.len(), 1);
    assert_eq!(parsed.malformed[0].line, 6);
    assert!(parsed.entries.iter().all(|e| e.prompt != "kaputt"));
}

#[test]
fn spaced_mode_exhausts_unanswered_entries_first() {
    let mut session = load_session(5);
    let mut screen = Screen::default();
    session.start(&mut screen).unwrap();

    // Five correct answers in a row: every entry must be asked once before
    // any entry is asked twice.
    let mut asked = Vec::new();
    for _ in 0..5 {
        let prompt = screen.prompt.clone().unwrap();
        assert_eq!(session.current().unwrap().correct_count, 0);
        asked.push(prompt.clone());
        session
            .handle(Command::SubmitAnswer(answer_for(&prompt).to_string()), &mut screen)
            .unwrap();
        session.handle(Command::Continue, &mut screen).unwrap();
    }

    asked.sort();
    asked.dedup();
    assert_eq!(asked.len(), 5);
    assert!(screen.results.iter().all(|o| o.is_correct()));
}

#[test]
fn score_accumulates_across_rounds() {
    let mut session = load_session(8);
    let mut screen = Screen::default();
    session.start(&mut screen).unwrap();

    // Narrow the pool to the single lesson 3 entry.
    session.handle(Command::DeselectAll, &mut screen).unwrap_err();
    session
        .handle(
            Command::LessonToggled {
                lesson: Some(3),
                enabled: true,
            },
            &mut screen,
        )
        .unwrap();
    assert_eq!(screen.prompt.as_deref(), Some("vielleicht"));

    let rounds = [("peut-être", 5), ("peut etre", 1), ("peut", -1)];
    let mut expected = 0;
    for (typed, points) in rounds {
        session
            .handle(Command::SubmitAnswer(typed.to_string()), &mut screen)
            .unwrap();
        expected += points;
        assert_eq!(screen.results.last().unwrap().points, points);
        assert_eq!(screen.score, Some(expected));
        session.handle(Command::Continue, &mut screen).unwrap();
    }

    let entry = session.current().unwrap();
    assert_eq!((entry.correct_count, entry.wrong_count), (2, 1));
    assert_eq!(session.score().unwrap(), 5);
}

#[test]
fn deselecting_everything_blocks_selection() {
    let mut session = load_session(1);
    let mut screen = Screen::default();
    session.start(&mut screen).unwrap();
    let shown = screen.prompt.clone().unwrap();

    let err = session.handle(Command::DeselectAll, &mut screen).unwrap_err();
    assert!(matches!(err, SessionError::NoQuestionsAvailable));
    assert_eq!(screen.prompt.as_deref(), Some(shown.as_str()));
    assert_eq!(session.state(), SessionState::Displaying);

    // The stale question can no longer be answered.
    let err = session
        .handle(Command::SubmitAnswer(answer_for(&shown).to_string()), &mut screen)
        .unwrap_err();
    assert!(matches!(err, SessionError::NoQuestionsAvailable));
    assert!(screen.results.is_empty());
    assert_eq!(session.score().unwrap(), 0);
    let entry = session.current().unwrap();
    assert_eq!((entry.correct_count, entry.wrong_count), (0, 0));

    let err = session.handle(Command::Continue, &mut screen);
    assert!(err.is_ok(), "continue is ignored while displaying");
}

#[test]
fn deselecting_after_an_answer_keeps_the_result_up() {
    let mut session = load_session(2);
    let mut screen = Screen::default();
    session.start(&mut screen).unwrap();

    session
        .handle(Command::SubmitAnswer("?".to_string()), &mut screen)
        .unwrap();
    session.handle(Command::DeselectAll, &mut screen).unwrap_err();
    assert_eq!(session.state(), SessionState::AwaitingContinue);

    let err = session.handle(Command::Continue, &mut screen).unwrap_err();
    assert!(matches!(err, SessionError::NoQuestionsAvailable));

    session.handle(Command::SelectAll, &mut screen).unwrap();
    assert_eq!(session.state(), SessionState::Displaying);
    assert_eq!(session.score().unwrap(), -1);
}

#[test]
fn uniform_mode_still_avoids_repeats() {
    let mut session = load_session(3).with_mode(SelectionMode::Uniform);
    let mut screen = Screen::default();
    session.start(&mut screen).unwrap();

    let mut previous = screen.prompt.clone();
    for _ in 0..30 {
        let prompt = previous.clone().unwrap();
        session
            .handle(Command::SubmitAnswer(answer_for(&prompt).to_string()), &mut screen)
            .unwrap();
        session.handle(Command::Continue, &mut screen).unwrap();
        assert_ne!(screen.prompt, previous);
        previous = screen.prompt.clone();
    }
}
