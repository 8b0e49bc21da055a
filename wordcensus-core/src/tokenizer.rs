//! Tokenization, normalization, and sentence splitting
//!
//! All word handling in the crate funnels through [`normalize_word`] so that the
//! aggregation keys and the words-of-interest loader can never drift apart.

use std::collections::HashMap;

/// Normalize a word to its canonical title-cased form.
///
/// The first alphabetic character of each cased run is uppercased and the rest
/// are lowercased, so `"STRENGTH"`, `"strength"`, and `"Strength"` all map to
/// `"Strength"`. Digits and underscores pass through and start a new cased run
/// (`"foo_bar"` becomes `"Foo_Bar"`). Normalization is idempotent.
pub fn normalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_alpha = false;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Tokenize a document into normalized word counts, in first-seen order.
///
/// Any character that is not alphanumeric or `_` is a separator; the surviving
/// maximal runs are the tokens. The returned pairs preserve the order in which
/// each distinct word first appeared, which keeps report output deterministic.
pub fn word_counts(text: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in text.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if token.is_empty() {
            continue;
        }
        let word = normalize_word(token);
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }
    counts
}

/// Split a document into sentence fragments.
///
/// Fragments are delimited by the literal `.` within each line, trimmed of
/// surrounding whitespace. Empty fragments (a trailing period produces one) are
/// preserved; downstream containment tests on them are harmless.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.split('.'))
        .map(|fragment| fragment.trim().to_string())
        .collect()
}

/// Whether a sentence fragment contains the given normalized word.
///
/// This is deliberately a case-insensitive SUBSTRING test, not a word-boundary
/// match: `"Art"` is contained in `"We start now"`. Kept for behavioral
/// compatibility with the original tool.
pub fn sentence_contains(sentence: &str, word: &str) -> bool {
    sentence.to_lowercase().contains(&word.to_lowercase())
}
