//! Canonical comparison form for answers.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text for comparison.
///
/// Lowercases, strips accents, maps `’` to `'`, drops `.!?,`, turns hyphens
/// into spaces and collapses whitespace. The steps run in that order.
pub fn normalize_answer(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded: String = lowered
        .as_str()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .filter_map(|c| match c {
            '\u{2019}' => Some('\''),
            '.' | '!' | '?' | ',' => None,
            '-' => Some(' '),
            c => Some(c),
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
