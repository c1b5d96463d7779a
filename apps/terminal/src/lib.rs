pub mod config;
pub mod db;
pub mod input;
pub mod loader;
pub mod render;
pub mod store;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{Command, Deck, ScoreStore, Session, SessionError};

use crate::config::{Args, Config};
use crate::db::SqliteRepository;
use crate::input::Input;
use crate::render::{TerminalRenderer, NO_WORDS_NOTICE};
use crate::store::SqliteScoreStore;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_args(Args::parse())?;

    let text = loader::load_word_list(&config.words).await?;
    let parsed = vocab_core::parse(&text, &config.labels)
        .with_context(|| format!("failed to parse word list {}", config.words))?;

    if let Some(parent) = config.database.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tracing::info!(path = %config.database.display(), "opening database");
    let repository = SqliteRepository::open(&config.database)
        .with_context(|| format!("failed to open database {}", config.database.display()))?;
    let store = SqliteScoreStore::new(repository, config.score_key.as_str());

    let mut renderer = TerminalRenderer::new(std::io::stdout());
    renderer.banner(
        parsed.entries.len(),
        parsed.malformed.len(),
        store.record()?.as_ref(),
    );

    let mut session = Session::new(Deck::new(parsed.entries), store).with_mode(config.mode);
    renderer.lessons(session.lessons());
    report(session.start(&mut renderer), &mut renderer)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match input::parse_line(&line, session.state()) {
            Ok(Input::Quit) => break,
            Ok(Input::ResetScore) => {
                session
                    .store_mut()
                    .reset()
                    .context("failed to reset score")?;
                renderer.notice("Score reset.");
                vocab_core::Renderer::show_score(&mut renderer, 0);
            }
            Ok(input) => {
                let result = dispatch(&mut session, input, &mut renderer);
                report(result, &mut renderer)?;
            }
            Err(e) => renderer.notice(&e.to_string()),
        }
    }

    Ok(())
}

/// Apply one parsed input line to the session.
pub fn dispatch<S: ScoreStore, W: Write>(
    session: &mut Session<S>,
    input: Input,
    renderer: &mut TerminalRenderer<W>,
) -> Result<(), SessionError> {
    match input {
        Input::Command(command) => {
            let mode_change = match &command {
                Command::SetSelectionMode(mode) => Some(*mode),
                _ => None,
            };
            session.handle(command, renderer)?;
            if let Some(mode) = mode_change {
                renderer.notice(&format!("Selection mode: {}", mode.as_str()));
            }
            Ok(())
        }
        Input::Toggle(lesson) => {
            let enabled = !session.is_lesson_enabled(lesson).unwrap_or(false);
            session.handle(Command::LessonToggled { lesson, enabled }, renderer)
        }
        Input::Lessons => {
            renderer.lessons(session.lessons());
            Ok(())
        }
        Input::Stats => {
            renderer.stats(&session.deck().lesson_stats());
            Ok(())
        }
        Input::Help => {
            renderer.help();
            Ok(())
        }
        // Handled by the caller, which owns the concrete store.
        Input::ResetScore | Input::Quit => Ok(()),
    }
}

/// Show recoverable session errors to the user; store failures are fatal.
fn report<W: Write>(
    result: Result<(), SessionError>,
    renderer: &mut TerminalRenderer<W>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(SessionError::Store(e)) => Err(e).context("failed to update score"),
        Err(SessionError::NoQuestionsAvailable) => {
            renderer.notice(NO_WORDS_NOTICE);
            Ok(())
        }
        Err(e) => {
            renderer.notice(&e.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vocab_core::{MemoryScoreStore, SelectionMode, SessionState, VocabularyEntry};

    fn session() -> Session<MemoryScoreStore> {
        let deck = Deck::new(vec![
            VocabularyEntry::new("Hund", "le chien").with_lesson(Some(1)),
            VocabularyEntry::new("Katze", "le chat").with_lesson(Some(2)),
        ]);
        Session::with_rng(deck, MemoryScoreStore::default(), StdRng::seed_from_u64(1))
    }

    fn text(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_toggle_flips_lesson() {
        let mut session = session();
        let mut renderer = TerminalRenderer::new(Vec::new());
        session.start(&mut renderer).unwrap();

        dispatch(&mut session, Input::Toggle(Some(1)), &mut renderer).unwrap();
        assert_eq!(session.is_lesson_enabled(Some(1)), Some(false));
        assert_eq!(session.current().unwrap().prompt, "Katze");

        dispatch(&mut session, Input::Toggle(Some(1)), &mut renderer).unwrap();
        assert_eq!(session.is_lesson_enabled(Some(1)), Some(true));
    }

    #[test]
    fn test_answer_round_trip_output() {
        let mut session = session();
        let mut renderer = TerminalRenderer::new(Vec::new());
        session.start(&mut renderer).unwrap();
        let prompt = session.current().unwrap().prompt.clone();
        let answer = session.current().unwrap().answer.clone();

        dispatch(
            &mut session,
            Input::Command(Command::SubmitAnswer(answer)),
            &mut renderer,
        )
        .unwrap();
        assert_eq!(session.state(), SessionState::AwaitingContinue);

        let out = text(renderer);
        assert!(out.contains(&format!("Correct! (+5) {prompt}")));
        assert!(out.contains("Score: 5"));
    }

    #[test]
    fn test_empty_pool_is_reported_as_notice() {
        let mut session = session();
        let mut renderer = TerminalRenderer::new(Vec::new());
        session.start(&mut renderer).unwrap();

        let result = dispatch(
            &mut session,
            Input::Command(Command::DeselectAll),
            &mut renderer,
        );
        report(result, &mut renderer).unwrap();
        assert!(text(renderer).contains(NO_WORDS_NOTICE));
    }

    #[test]
    fn test_unknown_lesson_is_reported_as_notice() {
        let mut session = session();
        let mut renderer = TerminalRenderer::new(Vec::new());

        let result = dispatch(&mut session, Input::Toggle(Some(9)), &mut renderer);
        report(result, &mut renderer).unwrap();
        assert!(text(renderer).contains("! unknown lesson 9"));
    }

    #[test]
    fn test_mode_change_is_announced() {
        let mut session = session();
        let mut renderer = TerminalRenderer::new(Vec::new());

        dispatch(
            &mut session,
            Input::Command(Command::SetSelectionMode(SelectionMode::Uniform)),
            &mut renderer,
        )
        .unwrap();
        assert_eq!(session.selection_mode(), SelectionMode::Uniform);
        assert!(text(renderer).contains("Selection mode: uniform"));
    }

    #[test]
    fn test_stats_listing() {
        let mut session = session();
        let mut renderer = TerminalRenderer::new(Vec::new());
        dispatch(&mut session, Input::Stats, &mut renderer).unwrap();
        assert_eq!(
            text(renderer),
            "Lesson 1: 0/1 learned, 0 correct, 0 wrong\nLesson 2: 0/1 learned, 0 correct, 0 wrong\n"
        );
    }
}
