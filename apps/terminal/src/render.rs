//! Terminal renderer.

use crate::db::date_utils::format_local;
use crate::db::CounterRecord;
use std::fmt::Display;
use std::io::Write;
use vocab_core::{CheckOutcome, LessonStats, LessonTag, Renderer, VocabularyEntry};

pub const NO_WORDS_NOTICE: &str = "No words available. Please select at least one lesson.";

const HELP: &str = "\
Type the translation and press Enter. After a result, press Enter to continue.
Commands:
  :lessons              list lessons and whether they are enabled
  :toggle <n|?>         enable or disable a lesson
  :all / :none          enable or disable every lesson
  :mode spaced|uniform  change how questions are picked
  :stats                progress per lesson
  :reset                reset the score to zero
  :help                 show this help
  :quit                 leave";

/// Human label for a lesson tag.
pub fn lesson_label(lesson: LessonTag) -> String {
    match lesson {
        Some(n) => format!("Lesson {n}"),
        None => "Lesson ?".to_string(),
    }
}

/// Writes quiz output as plain lines.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        let written = writeln!(self.out, "{text}").and_then(|_| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    pub fn notice(&mut self, message: &str) {
        self.line(format_args!("! {message}"));
    }

    pub fn banner(&mut self, loaded: usize, rejected: usize, score: Option<&CounterRecord>) {
        self.line(format_args!("Loaded {loaded} words ({rejected} malformed rows skipped)."));
        if let Some(updated_at) = score.and_then(|r| r.updated_at.as_ref()) {
            self.line(format_args!("Last played {}.", format_local(updated_at)));
        }
    }

    pub fn lessons(&mut self, lessons: &[(LessonTag, bool)]) {
        for (lesson, enabled) in lessons {
            let mark = if *enabled { "x" } else { " " };
            self.line(format_args!("[{mark}] {}", lesson_label(*lesson)));
        }
    }

    pub fn stats(&mut self, stats: &[LessonStats]) {
        for s in stats {
            self.line(format_args!(
                "{}: {}/{} learned, {} correct, {} wrong",
                lesson_label(s.lesson),
                s.mastered,
                s.entries,
                s.correct,
                s.wrong
            ));
        }
    }

    pub fn help(&mut self) {
        self.line(HELP);
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn show_prompt(&mut self, entry: &VocabularyEntry) {
        self.line(format_args!("\n{}", entry.prompt));
    }

    fn show_result(&mut self, outcome: &CheckOutcome) {
        if outcome.is_correct() {
            self.line(format_args!(
                "Correct! ({:+}) {} = {}",
                outcome.points, outcome.prompt, outcome.answer
            ));
        } else {
            self.line(format_args!(
                "Incorrect! ({:+}) The correct answer is: {}",
                outcome.points, outcome.answer
            ));
        }
        if !outcome.phonetic.is_empty() {
            self.line(format_args!("[{}]", outcome.phonetic));
        }
        self.line("Press Enter to continue.");
    }

    fn clear_result(&mut self) {}

    fn show_score(&mut self, score: i64) {
        self.line(format_args!("Score: {score}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::{check_answer, EntryId};

    fn output(f: impl FnOnce(&mut TerminalRenderer<Vec<u8>>)) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        f(&mut renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn outcome(typed: &str, answer: &str, phonetic: &str) -> CheckOutcome {
        let result = check_answer(typed, answer);
        CheckOutcome {
            entry: EntryId(0),
            prompt: "Hund".to_string(),
            answer: answer.to_string(),
            phonetic: phonetic.to_string(),
            points: result.points(),
            score: 0,
            result,
        }
    }

    #[test]
    fn test_correct_result() {
        let text = output(|r| r.show_result(&outcome("chien", "chien", "")));
        assert!(text.starts_with("Correct! (+5) Hund = chien\n"));
        assert!(text.ends_with("Press Enter to continue.\n"));
    }

    #[test]
    fn test_incorrect_result_with_phonetic() {
        let text = output(|r| r.show_result(&outcome("chat", "chien", "ʃjɛ̃")));
        assert!(text.contains("Incorrect! (-1) The correct answer is: chien\n"));
        assert!(text.contains("[ʃjɛ̃]\n"));
    }

    #[test]
    fn test_lessons_listing() {
        let text = output(|r| r.lessons(&[(Some(1), true), (None, false)]));
        assert_eq!(text, "[x] Lesson 1\n[ ] Lesson ?\n");
    }

    #[test]
    fn test_score_and_notice() {
        let text = output(|r| {
            r.show_score(-3);
            r.notice(NO_WORDS_NOTICE);
        });
        assert_eq!(
            text,
            "Score: -3\n! No words available. Please select at least one lesson.\n"
        );
    }
}
