// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use cryptogram_search::Decrypter;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write `lines` to a throwaway word-list file, one per line.
///
/// The file lives as long as the returned handle.
pub fn word_list_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp word list");
    for line in lines {
        writeln!(file, "{line}").expect("write temp word list");
    }
    file
}

/// A decrypter loaded with the given dictionary words.
pub fn decrypter_with(words: &[&str]) -> Decrypter {
    let file = word_list_file(words);
    let mut decrypter = Decrypter::new();
    decrypter.load(file.path()).expect("load temp word list");
    decrypter
}
