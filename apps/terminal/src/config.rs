//! Command line and environment configuration.

use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;
use vocab_core::{ColumnLabels, SelectionMode};

/// Vocabulary flashcard quiz in the terminal.
#[derive(Debug, Parser)]
#[command(name = "vocab-trainer", version, about)]
pub struct Args {
    /// Word list to load: a file path or an http(s) URL.
    #[arg(long, env = "VOCAB_WORDS", default_value = "data/words.csv")]
    pub words: String,

    /// SQLite database holding the score.
    #[arg(long, env = "VOCAB_DB")]
    pub database: Option<PathBuf>,

    /// Name of the persisted score counter.
    #[arg(long, env = "VOCAB_SCORE_KEY", default_value = "score")]
    pub score_key: String,

    /// Question selection mode.
    #[arg(long, env = "VOCAB_MODE", default_value = "spaced", value_parser = ["spaced", "uniform"])]
    pub mode: String,

    #[arg(long, default_value = "DEUTSCH")]
    pub prompt_column: String,

    #[arg(long, default_value = "FRANZÖSISCH")]
    pub answer_column: String,

    #[arg(long, default_value = "Unité")]
    pub unit_column: String,

    #[arg(long, default_value = "Leçon")]
    pub lesson_column: String,

    #[arg(long, default_value = "PHONETIK")]
    pub phonetic_column: String,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub words: String,
    pub database: PathBuf,
    pub score_key: String,
    pub mode: SelectionMode,
    pub labels: ColumnLabels,
}

impl Config {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mode = SelectionMode::from_str(&args.mode)
            .ok_or_else(|| anyhow!("unknown selection mode {:?}", args.mode))?;

        Ok(Self {
            words: args.words,
            database: args.database.unwrap_or_else(default_db_path),
            score_key: args.score_key,
            mode,
            labels: ColumnLabels {
                prompt: args.prompt_column,
                answer: args.answer_column,
                unit: args.unit_column,
                lesson: args.lesson_column,
                phonetic: args.phonetic_column,
            },
        })
    }
}

fn default_db_path() -> PathBuf {
    // Use the app data directory, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-trainer")
        .join("vocab.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["vocab-trainer"]).unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.labels, ColumnLabels::default());
        assert_eq!(config.mode, SelectionMode::Spaced);
        assert!(config.database.ends_with("vocab-trainer/vocab.db"));
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "vocab-trainer",
            "--words",
            "https://example.org/words.csv",
            "--database",
            "/tmp/quiz.db",
            "--mode",
            "uniform",
            "--prompt-column",
            "EN",
            "--answer-column",
            "ES",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.words, "https://example.org/words.csv");
        assert_eq!(config.database, PathBuf::from("/tmp/quiz.db"));
        assert_eq!(config.mode, SelectionMode::Uniform);
        assert_eq!(config.labels.prompt, "EN");
        assert_eq!(config.labels.answer, "ES");
        assert_eq!(config.labels.lesson, "Leçon");
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Args::try_parse_from(["vocab-trainer", "--mode", "random"]).is_err());
    }
}
