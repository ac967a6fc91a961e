// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters incremented as the search explores, records, and prunes
//! branches. Reset at the start of every crack.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Search outcome counters.
#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Complete, valid plaintexts recorded (one per reaching branch).
    SolutionsFound,
    /// Candidates rejected by the mapping before any state change.
    RejectedExtensions,
    /// Branches abandoned because a fully resolved token was not a word.
    InvalidBranches,
    /// Branches abandoned because no candidate matched the chosen word.
    EmptyCandidateSets,
}

/// Fixed-size counter array, one slot per [`Counters`] variant.
#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub(crate) fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}
