// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: load a word list, crack a cryptogram, print
//! every consistent plaintext.

use cryptogram_search::{Counters, Decrypter};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <word-list-file> <ciphertext>", args[0]);
        process::exit(1);
    }
    let word_list_path = &args[1];
    let ciphertext = &args[2];

    let mut decrypter = Decrypter::new();
    if let Err(err) = decrypter.load(word_list_path) {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }

    let solutions = decrypter.crack(ciphertext);
    for solution in &solutions {
        println!("{solution}");
    }

    let statistics = decrypter.statistics();
    println!();
    println!("{} solution(s)", solutions.len());
    println!("Statistics:");
    println!(
        "  Rejected extensions:  {}",
        statistics.get(Counters::RejectedExtensions)
    );
    println!(
        "  Invalid branches:     {}",
        statistics.get(Counters::InvalidBranches)
    );
    println!(
        "  Empty candidate sets: {}",
        statistics.get(Counters::EmptyCandidateSets)
    );
}
