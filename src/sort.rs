//! Filename ordering strategies
//!
//! The gif path sorts folder listings lexicographically; the sheet path uses
//! a natural sort where embedded digit runs compare as integers rather than
//! character-by-character. Both are exposed as one injectable strategy.

use std::cmp::Ordering;

/// How a collected file listing is ordered before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Plain string order: "f10.png" sorts before "f2.png"
    Lexicographic,
    /// Digit runs compare numerically: "f2.png" sorts before "f10.png"
    Natural,
}

impl SortOrder {
    /// Sort `names` in place according to this strategy.
    pub fn sort(self, names: &mut [String]) {
        match self {
            SortOrder::Lexicographic => names.sort(),
            SortOrder::Natural => names.sort_by(|a, b| natural_cmp(a, b)),
        }
    }
}

/// One run of a filename: either a digit run or a literal text chunk.
///
/// Keys always start with a (possibly empty) text run and then alternate
/// text/number, so the derived cross-variant ordering is never exercised
/// when comparing two keys element-wise.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Run {
    Number(u128),
    Text(String),
}

/// Compare two names by their natural keys.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Split a name into alternating text and digit runs.
fn natural_key(name: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            if digits.is_empty() {
                // Emit the preceding text run, empty or not, so that keys
                // always alternate starting from a text run
                runs.push(Run::Text(std::mem::take(&mut text)));
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                runs.push(Run::Number(parse_digits(&digits)));
                digits.clear();
            }
            text.push(ch);
        }
    }
    if !digits.is_empty() {
        runs.push(Run::Number(parse_digits(&digits)));
    }
    if !text.is_empty() {
        runs.push(Run::Text(text));
    }
    runs
}

fn parse_digits(digits: &str) -> u128 {
    // Runs longer than 38 digits overflow u128; saturate so they still sort
    // after everything representable
    digits.parse().unwrap_or(u128::MAX)
}
