// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive backtracking decryption search.
//!
//! The decrypter orchestrates the other components into a search over
//! partial letter mappings:
//!
//! 1. Choose the message token whose current translation has the most
//!    unresolved letters (ties: the longer token, then first occurrence).
//!    This is a most-constrained-variable heuristic.
//! 2. Ask the word list for the candidates matching that token's pattern
//!    and its partial translation. No candidates fails the branch.
//! 3. For each candidate in dictionary order: extend the mapping, check
//!    every fully resolved token of the retranslated message against the
//!    dictionary, then record the solution or recurse. The extension is
//!    rolled back before the next candidate, on every path.
//!
//! A branch that fails just contributes nothing; only an empty overall
//! result means "no consistent decryption exists". All solutions across
//! the whole tree are collected and returned sorted; the same plaintext
//! reached through distinct branches appears once per branch.

pub mod statistics;

use crate::dictionary::{WordList, WordListError};
use crate::tokenizer::{Tokenizer, DEFAULT_SEPARATORS};
use crate::translator::{Translator, UNRESOLVED};
use log::debug;
use std::path::Path;

use statistics::{Counters, Statistics};

/// Enumerates every dictionary-consistent decryption of a cryptogram.
#[derive(Debug)]
pub struct Decrypter {
    word_list: WordList,
    translator: Translator,
    tokenizer: Tokenizer,
    statistics: Statistics,
}

impl Decrypter {
    /// Create a decrypter using [`DEFAULT_SEPARATORS`].
    pub fn new() -> Self {
        Self::with_separators(DEFAULT_SEPARATORS)
    }

    /// Create a decrypter that tokenizes messages on a custom separator set.
    pub fn with_separators(separators: &str) -> Self {
        Self {
            word_list: WordList::new(),
            translator: Translator::new(),
            tokenizer: Tokenizer::new(separators),
            statistics: Statistics::new(),
        }
    }

    /// Load the word list at `path`, replacing any previous dictionary.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), WordListError> {
        self.word_list.load(path)
    }

    /// Counters from the most recent [`crack`](Self::crack).
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Return every complete plaintext of `ciphertext` consistent with one
    /// bijective letter mapping and the loaded dictionary, sorted
    /// lexicographically.
    ///
    /// Non-letter characters and the letter casing of the input are
    /// preserved verbatim in every solution. An empty result is a normal
    /// outcome: no consistent decryption exists.
    pub fn crack(&mut self, ciphertext: &str) -> Vec<String> {
        self.statistics.reset();
        debug_assert_eq!(self.translator.depth(), 0);

        // A message with nothing left to resolve (no letters at all, or no
        // tokens) is its own translation: accept it if its tokens are all
        // words, which holds vacuously for a token-free message.
        let translation = self.translator.get_translation(ciphertext);
        let mut solutions = if self.fully_translated(&translation) {
            if self.valid_so_far(&translation) {
                vec![translation]
            } else {
                Vec::new()
            }
        } else {
            self.search(ciphertext)
        };

        debug_assert_eq!(self.translator.depth(), 0);
        solutions.sort();
        debug!(
            "crack finished: {} solutions, {} rejected extensions, {} invalid branches, {} empty candidate sets",
            self.statistics.get(Counters::SolutionsFound),
            self.statistics.get(Counters::RejectedExtensions),
            self.statistics.get(Counters::InvalidBranches),
            self.statistics.get(Counters::EmptyCandidateSets),
        );
        solutions
    }

    /// Explore every extension of the current mapping, returning the
    /// complete plaintexts found below this point of the tree.
    fn search(&mut self, ciphertext: &str) -> Vec<String> {
        let cipher_word = self.next_word(ciphertext);
        let partial = self.translator.get_translation(&cipher_word);
        let candidates = self.word_list.find_candidates(&cipher_word, &partial);
        if candidates.is_empty() {
            self.statistics.increment(Counters::EmptyCandidateSets);
            return Vec::new();
        }

        let mut solutions = Vec::new();
        for candidate in candidates {
            self.try_candidate(ciphertext, &cipher_word, &candidate, &mut solutions);
        }
        solutions
    }

    /// Try one candidate for one cipher word, appending any solutions.
    ///
    /// Every path out of a successful push pops exactly once before
    /// returning.
    fn try_candidate(
        &mut self,
        ciphertext: &str,
        cipher_word: &str,
        candidate: &str,
        solutions: &mut Vec<String>,
    ) {
        if !self.translator.push_mapping(cipher_word, candidate) {
            self.statistics.increment(Counters::RejectedExtensions);
            return;
        }

        let translation = self.translator.get_translation(ciphertext);
        if !self.valid_so_far(&translation) {
            self.statistics.increment(Counters::InvalidBranches);
        } else if self.fully_translated(&translation) {
            self.statistics.increment(Counters::SolutionsFound);
            solutions.push(translation);
        } else {
            let found = self.search(ciphertext);
            solutions.extend(found);
        }

        // A false pop here would mean the push above was lost: the
        // push/pop discipline is unrecoverably broken.
        assert!(self.translator.pop_mapping());
    }

    /// The cipher token to resolve next: most unresolved letters under the
    /// current mapping, then longest, then first occurrence.
    fn next_word(&self, ciphertext: &str) -> String {
        let translation = self.translator.get_translation(ciphertext);
        let cipher_tokens = self.tokenizer.tokenize(ciphertext);
        let translated_tokens = self.tokenizer.tokenize(&translation);
        debug_assert_eq!(cipher_tokens.len(), translated_tokens.len());

        let mut best = 0;
        let mut best_unresolved = 0;
        for (i, token) in translated_tokens.iter().enumerate() {
            let unresolved = token.chars().filter(|&c| c == UNRESOLVED).count();
            if unresolved > best_unresolved
                || (unresolved == best_unresolved && token.len() > translated_tokens[best].len())
            {
                best = i;
                best_unresolved = unresolved;
            }
        }
        cipher_tokens[best].to_string()
    }

    /// True if every fully resolved token of `translation` is a dictionary
    /// word. Tokens still containing wildcards are exempt.
    fn valid_so_far(&self, translation: &str) -> bool {
        self.tokenizer
            .tokenize(translation)
            .into_iter()
            .filter(|token| !token.contains(UNRESOLVED))
            .all(|token| self.word_list.contains(token))
    }

    /// True if no letter of `translation` remains unresolved.
    fn fully_translated(&self, translation: &str) -> bool {
        !translation.contains(UNRESOLVED)
    }
}

impl Default for Decrypter {
    fn default() -> Self {
        Self::new()
    }
}
