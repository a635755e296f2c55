//! Word list parser for pasted vocabulary.
//!
//! # Formats
//! ```text
//! hello                      one word per line
//! hello, world, computer     comma separated (parts may be phrases)
//! hello. world. computer     period separated
//! hello world computer       up to three short words are split
//! the quick brown fox jumps  anything longer stays one phrase
//! ```
//!
//! Lines are handled independently, so formats can be mixed.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// More words than this on one line always means a phrase.
const PHRASE_MIN_WORDS: usize = 4;
/// A line of at most this many words may be split into single words.
const SPLIT_MAX_WORDS: usize = 3;
/// Mean word length (in chars) below which short lines are split.
const SPLIT_MAX_AVG_LEN: f64 = 8.0;

static PERIOD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+").expect("period separator pattern is valid"));

/// Sample inputs for each accepted format, as `(label, input)` pairs.
pub const INPUT_EXAMPLES: &[(&str, &str)] = &[
    ("newline", "hello\nworld\ncomputer"),
    ("comma", "hello, world, computer"),
    ("space", "hello world computer"),
    ("dot", "hello. world. computer"),
    ("phrases", "good morning, how are you, thank you very much"),
    ("mixed", "hello, world\ncomputer\ngood morning"),
];

/// Split free-form text into an ordered, deduplicated list of words and phrases.
pub fn parse_words(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return vec![];
    }

    let mut words = Vec::new();
    for line in input.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        match classify(line) {
            LineType::CommaList => {
                words.extend(line.split(',').map(str::trim).map(str::to_string));
            }
            LineType::PeriodList => {
                words.extend(PERIOD_SEPARATOR.split(line).map(|part| {
                    let part = part.trim();
                    part.strip_suffix('.').unwrap_or(part).to_string()
                }));
            }
            LineType::WordList => {
                words.extend(line.split_whitespace().map(str::to_string));
            }
            LineType::Phrase => words.push(line.to_string()),
        }
    }

    dedup(words)
}

enum LineType {
    CommaList,
    PeriodList,
    WordList,
    Phrase,
}

fn classify(line: &str) -> LineType {
    if line.contains(',') {
        LineType::CommaList
    } else if line.contains('.') && !line.trim_end().ends_with('.') {
        LineType::PeriodList
    } else if line.contains(' ') {
        classify_spaced(line)
    } else {
        LineType::Phrase
    }
}

/// Decide whether a space separated line is a list of words or one phrase.
fn classify_spaced(line: &str) -> LineType {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let count = parts.len();
    if count > PHRASE_MIN_WORDS {
        return LineType::Phrase;
    }

    let total_len: usize = parts.iter().map(|p| p.chars().count()).sum();
    let avg_len = total_len as f64 / count as f64;

    if count <= SPLIT_MAX_WORDS && avg_len < SPLIT_MAX_AVG_LEN {
        LineType::WordList
    } else {
        LineType::Phrase
    }
}

fn dedup(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
