// src/puzzles/sequence.rs
// =============================================================================
// The sequence classifier.
//
// A string is "valid" when its letter frequencies are nearly uniform:
// - every letter appears the same number of times, or
// - there are exactly two different counts and they differ by one
//   (dropping one occurrence of a letter could make everything equal)
//
// How it works:
// 1. Reject anything that is not purely alphabetic (this includes "")
// 2. Count each character          -> frequency table
// 3. Count how often each count appears -> occurrence-of-occurrence table
// 4. Look at how many distinct counts there are
//
// Rust concepts:
// - HashMap / BTreeMap: counting things
// - The entry API: insert-or-update in one step
// =============================================================================

use std::collections::{BTreeMap, HashMap};
use std::fmt;

// The answer the classifier (and the bracket matcher) gives back
//
// Converts to 1/0 with u8::from and prints as "Valid"/"Not valid"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    NotValid,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::NotValid
        }
    }
}

impl From<Verdict> for u8 {
    fn from(verdict: Verdict) -> u8 {
        match verdict {
            Verdict::Valid => 1,
            Verdict::NotValid => 0,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "Valid"),
            Verdict::NotValid => write!(f, "Not valid"),
        }
    }
}

// Classifies a sequence under the near-uniform frequency rule
//
// Examples:
//   "aabbcc"     -> Valid     (every letter twice)
//   "aabbc"      -> Valid     (counts 2 and 1, one apart)
//   "aaabbbcccd" -> NotValid  (counts 3 and 1, two apart)
//   "abc123"     -> NotValid  (digits are not letters)
//   ""           -> NotValid  (nothing alphabetic to judge)
pub fn classify(sequence: &str) -> Verdict {
    if sequence.is_empty() || !sequence.chars().all(char::is_alphabetic) {
        return Verdict::NotValid;
    }

    let frequencies = frequency_table(sequence);
    let occurrences = occurrence_table(&frequencies);

    let valid = match occurrences.len() {
        1 => true,
        2 => {
            // BTreeMap keys come out sorted, so the first is the smaller count
            let mut counts = occurrences.keys();
            match (counts.next(), counts.next()) {
                (Some(low), Some(high)) => high - low == 1,
                _ => false,
            }
        }
        _ => false,
    };

    Verdict::from(valid)
}

// character -> number of times it appears
fn frequency_table(sequence: &str) -> HashMap<char, usize> {
    let mut table = HashMap::new();
    for c in sequence.chars() {
        *table.entry(c).or_insert(0) += 1;
    }
    table
}

// count -> number of distinct characters that have that count
fn occurrence_table(frequencies: &HashMap<char, usize>) -> BTreeMap<usize, usize> {
    let mut table = BTreeMap::new();
    for &count in frequencies.values() {
        *table.entry(count).or_insert(0) += 1;
    }
    table
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the entry API?
//    - table.entry(key) finds the slot for key, existing or not
//    - .or_insert(0) fills an empty slot, then we add 1 through the &mut
//
// 2. Why BTreeMap for the second table?
//    - It keeps keys sorted, so the smaller count always comes first
//
// 3. Why a Verdict enum instead of bool?
//    - It prints itself as "Valid"/"Not valid"
//    - It still converts to bool or 1/0 when needed
// -----------------------------------------------------------------------------
