//! Delimited word list parser.
//!
//! # Format
//! ```text
//! DEUTSCH;FRANZÖSISCH;Unité;Leçon;PHONETIK
//! Hund;chien;1;2;hount
//! Katze;chat (m);1;2;
//! ```
//!
//! The delimiter is `;` when the header row contains one, `,` otherwise.
//! A data row without any delimiter is a continuation of the row above it
//! (an answer that contained a line break) and is merged into that row.

use crate::error::{MalformedRowError, ParseError, Result};
use crate::types::VocabularyEntry;
use serde::{Deserialize, Serialize};

/// Header labels identifying each column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLabels {
    pub prompt: String,
    pub answer: String,
    pub unit: String,
    pub lesson: String,
    pub phonetic: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            prompt: "DEUTSCH".to_string(),
            answer: "FRANZÖSISCH".to_string(),
            unit: "Unité".to_string(),
            lesson: "Leçon".to_string(),
            phonetic: "PHONETIK".to_string(),
        }
    }
}

/// Entries parsed from a word list, plus the rows that were rejected.
#[derive(Debug, Clone, Default)]
pub struct ParsedWordList {
    pub entries: Vec<VocabularyEntry>,
    pub malformed: Vec<MalformedRowError>,
}

/// Parse word list text into vocabulary entries.
pub fn parse(content: &str, labels: &ColumnLabels) -> Result<ParsedWordList> {
    // Spreadsheet exports often start with a byte-order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Ok(ParsedWordList::default());
    }

    let mut rows: Vec<String> = content.lines().map(str::to_string).collect();
    let delimiter = if rows[0].contains(';') { ';' } else { ',' };
    let headers: Vec<&str> = rows[0].split(delimiter).map(str::trim).collect();
    let columns = Columns::resolve(&headers, labels)?;
    let expected = headers.len();

    merge_continuation_rows(&mut rows, delimiter);

    let mut parsed = ParsedWordList::default();
    for (idx, row) in rows.iter().enumerate().skip(1) {
        if row.trim().is_empty() {
            continue;
        }

        let values: Vec<&str> = row.split(delimiter).map(str::trim).collect();
        if values.len() != expected {
            let err = MalformedRowError {
                line: idx + 1,
                expected,
                found: values.len(),
                row: row.clone(),
            };
            tracing::warn!(
                line = err.line,
                expected,
                found = err.found,
                "row length does not match header length"
            );
            parsed.malformed.push(err);
            continue;
        }

        if let Some(entry) = columns.build(&values) {
            parsed.entries.push(entry);
        }
    }

    tracing::debug!(
        entries = parsed.entries.len(),
        malformed = parsed.malformed.len(),
        "parsed word list"
    );
    Ok(parsed)
}

/// Fold delimiter-less rows into the row above them.
///
/// Runs front to back over the live row list, so a second consecutive
/// continuation lands in the slot emptied by the first one.
fn merge_continuation_rows(rows: &mut [String], delimiter: char) {
    for idx in 1..rows.len() {
        if rows[idx].contains(delimiter) {
            continue;
        }
        let continuation = std::mem::take(&mut rows[idx]);
        let previous = &mut rows[idx - 1];
        previous.push(' ');
        previous.push_str(&continuation);
    }
}

/// Column positions resolved from the header row.
struct Columns {
    prompt: usize,
    answer: usize,
    unit: Option<usize>,
    lesson: Option<usize>,
    phonetic: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[&str], labels: &ColumnLabels) -> Result<Self> {
        // Later columns shadow earlier ones carrying the same label.
        let find = |label: &str| headers.iter().rposition(|h| *h == label);
        let required = |label: &str| {
            find(label).ok_or_else(|| ParseError::MissingColumn {
                label: label.to_string(),
            })
        };

        Ok(Self {
            prompt: required(labels.prompt.as_str())?,
            answer: required(labels.answer.as_str())?,
            unit: find(labels.unit.as_str()),
            lesson: find(labels.lesson.as_str()),
            phonetic: find(labels.phonetic.as_str()),
        })
    }

    fn build(&self, values: &[&str]) -> Option<VocabularyEntry> {
        let prompt = values[self.prompt].replace('"', "");
        let answer = values[self.answer].replace('"', "");
        if prompt.is_empty() || answer.is_empty() {
            return None;
        }

        let field = |col: Option<usize>| col.map(|c| values[c]);
        Some(VocabularyEntry {
            prompt,
            answer,
            unit: field(self.unit).and_then(parse_number),
            lesson: field(self.lesson).and_then(parse_number),
            phonetic: field(self.phonetic).unwrap_or_default().to_string(),
            correct_count: 0,
            wrong_count: 0,
        })
    }
}

/// Permissive numeric field parsing: empty text is zero, integral values
/// are accepted in either integer or decimal notation, anything else is
/// treated as not a number.
fn parse_number(text: &str) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}
