//! Cross-file aggregation into a corpus-wide word summary

use crate::error::{CoreError, Result};
use crate::tokenizer::{sentence_contains, split_sentences, word_counts};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Per-word statistics accumulated across the corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordStats {
    /// Total occurrences across all documents
    pub count: usize,
    /// One entry per document the word appeared in, in fold order
    pub documents: Vec<String>,
    /// Every sentence fragment containing the word, in file then fragment order.
    /// Duplicates are preserved.
    pub sentences: Vec<String>,
}

/// The complete word → statistics mapping produced by one run.
///
/// Keys are normalized word forms (see [`crate::tokenizer::normalize_word`]).
/// Iteration order is first-occurrence order across the corpus. The summary is
/// built once by [`summarize`] and read-only afterwards.
#[derive(Debug, Default)]
pub struct Summary {
    entries: HashMap<String, WordStats>,
    order: Vec<String>,
}

impl Summary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words in the summary
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the summary holds no words at all
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up the statistics for a normalized word
    pub fn get(&self, word: &str) -> Option<&WordStats> {
        self.entries.get(word)
    }

    /// Look up a requested word of interest, failing loudly on a miss
    pub fn require(&self, word: &str) -> Result<&WordStats> {
        self.get(word).ok_or_else(|| CoreError::UnknownInterestWord {
            word: word.to_string(),
        })
    }

    /// Iterate entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStats)> {
        self.order
            .iter()
            .map(move |word| (word.as_str(), &self.entries[word]))
    }

    /// Get-or-create accessor: returns the stats for `word`, inserting an empty
    /// record on first access. This is the only way entries are created, so the
    /// create-on-first-occurrence branch is explicit and testable.
    fn entry_mut(&mut self, word: &str) -> &mut WordStats {
        match self.entries.entry(word.to_string()) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                self.order.push(word.to_string());
                entry.insert(WordStats::default())
            }
        }
    }

    /// Fold one document's contribution into the summary.
    ///
    /// `counts` must be the document's normalized word counts and `sentences`
    /// its full fragment list; each distinct word picks up the subset of
    /// fragments containing it.
    fn fold_document(&mut self, doc_id: &str, counts: &[(String, usize)], sentences: &[String]) {
        for (word, count) in counts {
            let matching: Vec<String> = sentences
                .iter()
                .filter(|s| sentence_contains(s, word))
                .cloned()
                .collect();

            let stats = self.entry_mut(word);
            stats.count += count;
            stats.sentences.extend(matching);
            stats.documents.push(doc_id.to_string());
        }
    }
}

/// Derive the document identifier from a path: the final path component.
fn document_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Build the corpus-wide [`Summary`] from the given documents.
///
/// Documents are folded strictly in the order supplied. A document that cannot
/// be read aborts the whole run with [`CoreError::DocumentReadFailure`]; no
/// partial summary is returned.
pub fn summarize<P: AsRef<Path>>(paths: &[P]) -> Result<Summary> {
    let mut summary = Summary::new();

    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CoreError::DocumentReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let doc_id = document_id(path);
        let counts = word_counts(&text);
        let sentences = split_sentences(&text);
        summary.fold_document(&doc_id, &counts, &sentences);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_path_list_gives_empty_summary() {
        let summary = summarize::<&Path>(&[]).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.len(), 0);
    }

    #[test]
    fn spec_example_two_documents() {
        let dir = TempDir::new().unwrap();
        let doc1 = write_doc(&dir, "doc1.txt", "The fundamentals to measure economic strength");
        let doc2 = write_doc(
            &dir,
            "doc2.txt",
            "The important engine of economic growth and strength",
        );

        let summary = summarize(&[doc1, doc2]).unwrap();

        let economic = summary.get("Economic").unwrap();
        assert_eq!(economic.count, 2);
        assert_eq!(economic.documents, vec!["doc1.txt", "doc2.txt"]);
        assert_eq!(
            economic.sentences,
            vec![
                "The fundamentals to measure economic strength",
                "The important engine of economic growth and strength",
            ]
        );

        let strength = summary.get("Strength").unwrap();
        assert_eq!(strength.count, 2);
        assert_eq!(strength.documents, vec!["doc1.txt", "doc2.txt"]);
        assert_eq!(strength.sentences.len(), 2);

        let fundamentals = summary.get("Fundamentals").unwrap();
        assert_eq!(fundamentals.count, 1);
        assert_eq!(fundamentals.documents, vec!["doc1.txt"]);
        assert_eq!(
            fundamentals.sentences,
            vec!["The fundamentals to measure economic strength"]
        );
    }

    #[test]
    fn case_variants_merge_across_documents() {
        let dir = TempDir::new().unwrap();
        let doc1 = write_doc(&dir, "a.txt", "Strength");
        let doc2 = write_doc(&dir, "b.txt", "strength");

        let summary = summarize(&[doc1, doc2]).unwrap();
        assert_eq!(summary.len(), 1);
        let stats = summary.get("Strength").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.documents, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn per_document_counts_sum_to_token_total() {
        let dir = TempDir::new().unwrap();
        let text = "one two two three three three";
        let doc = write_doc(&dir, "counts.txt", text);

        let summary = summarize(&[doc]).unwrap();
        let total: usize = summary.iter().map(|(_, stats)| stats.count).sum();
        assert_eq!(total, crate::tokenizer::word_counts(text).iter().map(|(_, c)| c).sum());
        assert_eq!(total, 6);
    }

    #[test]
    fn documents_list_has_one_entry_per_occurrence_bearing_file() {
        let dir = TempDir::new().unwrap();
        let doc1 = write_doc(&dir, "x.txt", "apple apple apple");
        let doc2 = write_doc(&dir, "y.txt", "pear");
        let doc3 = write_doc(&dir, "z.txt", "apple again");

        let summary = summarize(&[doc1, doc2, doc3]).unwrap();
        let apple = summary.get("Apple").unwrap();
        // repeated occurrences within one file still yield a single entry
        assert_eq!(apple.documents, vec!["x.txt", "z.txt"]);
        assert_eq!(apple.count, 4);
    }

    #[test]
    fn every_attributed_sentence_contains_the_word() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(
            &dir,
            "mixed.txt",
            "Economic growth is slow. Weather is fine. Growth resumed.",
        );

        let summary = summarize(&[doc]).unwrap();
        for (word, stats) in summary.iter() {
            for sentence in &stats.sentences {
                assert!(
                    crate::tokenizer::sentence_contains(sentence, word),
                    "sentence {sentence:?} attributed to {word:?} does not contain it"
                );
            }
        }
        let growth = summary.get("Growth").unwrap();
        assert_eq!(
            growth.sentences,
            vec!["Economic growth is slow", "Growth resumed"]
        );
    }

    #[test]
    fn substring_attribution_reaches_into_longer_words() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "art.txt", "We start now. Art is long.");

        let summary = summarize(&[doc]).unwrap();
        let art = summary.get("Art").unwrap();
        assert_eq!(art.count, 1);
        // "Art" is a substring of "start", so the first fragment is attributed too
        assert_eq!(art.sentences, vec!["We start now", "Art is long"]);
    }

    #[test]
    fn unreadable_document_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let ok = write_doc(&dir, "ok.txt", "hello");
        let missing = dir.path().join("vanished.txt");

        let err = summarize(&[ok, missing]).unwrap_err();
        match err {
            CoreError::DocumentReadFailure { path, .. } => {
                assert!(path.ends_with("vanished.txt"));
            }
            other => panic!("expected DocumentReadFailure, got {other:?}"),
        }
    }

    #[test]
    fn require_fails_loudly_on_unknown_word() {
        let summary = Summary::new();
        let err = summary.require("Ghost").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownInterestWord { ref word } if word == "Ghost"
        ));
    }

    #[test]
    fn iteration_follows_first_occurrence_order() {
        let dir = TempDir::new().unwrap();
        let doc1 = write_doc(&dir, "1.txt", "zebra apple");
        let doc2 = write_doc(&dir, "2.txt", "mango apple");

        let summary = summarize(&[doc1, doc2]).unwrap();
        let words: Vec<&str> = summary.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["Zebra", "Apple", "Mango"]);
    }
}
