//! Expansion of a stored answer field into its accepted variants.
//!
//! Stored answers may carry hints in `(...)` or `[...]` and list
//! alternatives with slashes:
//! - `ami/e` or `ami/amie`: a word and its suffixed form (`ami`, `amie`)
//! - `tomber / chuter`: two full phrases, also accepted together in either
//!   order (`tomber chuter`, `chuter tomber`)
//!
//! In the suffix form, a right-hand side that restates the last word of the
//! left-hand side replaces that word rather than being appended to it, so
//! `ami/amie` and `il/ils` expand the same way `ami/e` and `il/s` do.

use regex::Regex;
use std::sync::LazyLock;

use super::normalize::normalize_answer;

static PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid parentheses pattern"));
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid brackets pattern"));
static SUFFIX_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\S)/(\S.*)$").expect("valid suffix slash pattern"));
static SPACED_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+\s)/(\s.+)$").expect("valid spaced slash pattern"));

/// Expand a raw answer field into normalized, de-duplicated variants.
pub fn expand_variants(answer: &str) -> Vec<String> {
    let stripped = PARENTHESES.replace_all(answer, "");
    let stripped = BRACKETS.replace_all(&stripped, "");
    let expanded = expand_slashes(stripped.trim());

    let mut variants: Vec<String> = Vec::new();
    for part in expanded.split('/') {
        let normalized = normalize_answer(part);
        if !normalized.is_empty() && !variants.contains(&normalized) {
            variants.push(normalized);
        }
    }
    variants
}

/// Rewrite slash notation so a plain split on `/` yields every alternative.
fn expand_slashes(text: &str) -> String {
    if let Some(caps) = SUFFIX_SLASH.captures(text) {
        let (left, right) = (&caps[1], &caps[2]);
        return format!("{left} / {}", suffixed(left, right));
    }

    if let Some(caps) = SPACED_SLASH.captures(text) {
        let (first, second) = (&caps[1], &caps[2]);
        return format!("{first}/{second}/{first}, {second}/{second}, {first}");
    }

    text.to_string()
}

/// Attach `fragment` to `left`. A fragment that restates the final word of
/// `left` replaces that word instead.
fn suffixed(left: &str, fragment: &str) -> String {
    let stem = left.rsplit(char::is_whitespace).next().unwrap_or(left);
    if !stem.is_empty() && fragment.starts_with(stem) {
        let lead = &left[..left.len() - stem.len()];
        format!("{lead}{fragment}")
    } else {
        format!("{left}{fragment}")
    }
}
