// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern-indexed word list.
//!
//! The word list is the search's candidate oracle. Loading a dictionary
//! file groups the words by their canonical [`pattern`], so that a cipher
//! word's whole candidate universe is a single bucket lookup; the search
//! then narrows that bucket against the letters its partial mapping has
//! already resolved.
//!
//! Buckets preserve file order, and duplicate lines produce duplicate
//! candidates; the search's output ordering is derived from it.

pub mod pattern;

use crate::index::HashIndex;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use pattern::word_pattern;

/// Errors raised while loading a word list.
///
/// Malformed lines are not errors (they are dropped silently); the only
/// failure is being unable to open the file at all.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The word-list file could not be opened.
    #[error("failed to open word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Dictionary of valid plaintext words, indexed by letter pattern.
#[derive(Debug, Default)]
pub struct WordList {
    patterns: HashIndex<String, Vec<String>>,
}

impl WordList {
    /// Create an empty word list.
    pub fn new() -> Self {
        Self {
            patterns: HashIndex::new(),
        }
    }

    /// Load `path`, replacing any previously loaded words.
    ///
    /// One candidate word per line. A line containing any character that is
    /// neither an ASCII letter nor an apostrophe is dropped, as is any line
    /// that cannot be read; surviving words are stored lowercase, in file
    /// order within their pattern bucket.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), WordListError> {
        let path = path.as_ref();
        self.patterns.reset();

        let file = File::open(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut loaded = 0usize;
        let mut dropped = 0usize;
        for line in BufReader::new(file).lines() {
            let Ok(line) = line else {
                dropped += 1;
                continue;
            };
            if !line
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '\'')
            {
                dropped += 1;
                continue;
            }
            let word = line.to_ascii_lowercase();
            let key = word_pattern(&word);
            match self.patterns.find_mut(&key) {
                Some(bucket) => bucket.push(word),
                None => self.patterns.associate(key, vec![word]),
            }
            loaded += 1;
        }

        info!(
            "loaded {} words across {} patterns from {}",
            loaded,
            self.patterns.len(),
            path.display()
        );
        debug!("dropped {} malformed lines", dropped);
        Ok(())
    }

    /// True if `word` is in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        match self.patterns.find(&word_pattern(&word)) {
            Some(bucket) => bucket.iter().any(|w| *w == word),
            None => false,
        }
    }

    /// Dictionary words that `cipher_word` could decrypt to, given the
    /// letters resolved so far.
    ///
    /// `partial_translation` is the cipher word under the current mapping:
    /// resolved letters in place, unresolved ones as wildcards. A word
    /// qualifies when it shares the cipher word's pattern and agrees with
    /// every non-wildcard position, ignoring case. Dictionary order and
    /// duplicates are preserved.
    pub fn find_candidates(&self, cipher_word: &str, partial_translation: &str) -> Vec<String> {
        let partial = partial_translation.to_ascii_lowercase();
        match self.patterns.find(&word_pattern(cipher_word)) {
            Some(bucket) => bucket
                .iter()
                .filter(|word| matches_translation(word, &partial))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

/// True if `word` agrees with every non-wildcard character of `partial`.
fn matches_translation(word: &str, partial: &str) -> bool {
    word.chars()
        .zip(partial.chars())
        .all(|(w, p)| p == crate::translator::UNRESOLVED || w == p)
}
