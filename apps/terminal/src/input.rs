//! Translation of typed lines into quiz input.

use thiserror::Error;
use vocab_core::{Command, LessonTag, SelectionMode, SessionState};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Flip a lesson between enabled and disabled.
    Toggle(LessonTag),
    Lessons,
    Stats,
    ResetScore,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command :{0}, type :help for a list")]
    UnknownCommand(String),

    #[error("expected a lesson number or ? after :toggle")]
    MissingLesson,

    #[error("invalid lesson {0:?}")]
    InvalidLesson(String),

    #[error("unknown mode {0:?}, expected spaced or uniform")]
    InvalidMode(String),
}

/// Interpret a line typed while the session is in `state`.
///
/// Lines starting with `:` are commands. Anything else is an answer while a
/// prompt is displayed and a request to continue while a result is shown.
pub fn parse_line(line: &str, state: SessionState) -> Result<Input, InputError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Ok(match state {
            SessionState::Displaying => Input::Command(Command::SubmitAnswer(line.to_string())),
            SessionState::AwaitingContinue => Input::Command(Command::Continue),
        });
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let argument = words.next();

    match name {
        "lessons" => Ok(Input::Lessons),
        "toggle" => parse_lesson(argument.ok_or(InputError::MissingLesson)?).map(Input::Toggle),
        "all" => Ok(Input::Command(Command::SelectAll)),
        "none" => Ok(Input::Command(Command::DeselectAll)),
        "mode" => {
            let mode = argument.unwrap_or_default();
            SelectionMode::from_str(mode)
                .map(|m| Input::Command(Command::SetSelectionMode(m)))
                .ok_or_else(|| InputError::InvalidMode(mode.to_string()))
        }
        "stats" => Ok(Input::Stats),
        "reset" => Ok(Input::ResetScore),
        "help" => Ok(Input::Help),
        "quit" | "q" => Ok(Input::Quit),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn parse_lesson(text: &str) -> Result<LessonTag, InputError> {
    if text == "?" {
        return Ok(None);
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|_| InputError::InvalidLesson(text.to_string()))
}
