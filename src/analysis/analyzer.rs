//! Tokenization and word statistics.
//!
//! Text is lowercased, every character that is not a letter, digit or
//! whitespace is replaced with a space, and the result is split on
//! whitespace. All statistics are computed from that token sequence.

use crate::models::AnalysisResult;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Number of decimal places kept for the average word length.
pub const AVERAGE_PRECISION: u32 = 2;

/// Analyze a block of text.
///
/// Never fails: empty, whitespace-only and punctuation-only input all produce
/// the zero-valued result.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn analyze_text(text: &str) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult::default();
    }

    let normalized = normalize(text);
    let words = tokenize(&normalized);

    let word_count = words.len();
    let total_length: usize = words.iter().map(|w| w.chars().count()).sum();

    let average_word_length = if word_count > 0 {
        round_to(total_length as f64 / word_count as f64, AVERAGE_PRECISION)
    } else {
        0.0
    };

    let longest_words = longest_words(&words);
    let word_frequency = word_frequency(&words);

    debug!(
        word_count,
        unique = word_frequency.len(),
        longest = longest_words.len(),
        "Analyzed text"
    );

    AnalysisResult {
        word_count,
        average_word_length,
        longest_words,
        word_frequency,
    }
}

/// Lowercase the text and replace punctuation and symbols with spaces.
///
/// Folding is per character, so no context-sensitive casing rules apply.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Split normalized text into tokens, in order of appearance.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Collect the distinct tokens of maximal length, in first-seen order.
pub fn longest_words(words: &[&str]) -> Vec<String> {
    let mut longest: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut max_length = 0;

    for word in words {
        let length = word.chars().count();

        if length > max_length {
            max_length = length;
            longest.clear();
            seen.clear();
            longest.push((*word).to_string());
            seen.insert(*word);
        } else if length == max_length && seen.insert(*word) {
            longest.push((*word).to_string());
        }
    }

    longest
}

/// Count occurrences of each token.
pub fn word_frequency(words: &[&str]) -> HashMap<String, usize> {
    let mut frequency: HashMap<String, usize> = HashMap::new();

    for word in words {
        *frequency.entry((*word).to_string()).or_insert(0) += 1;
    }

    frequency
}

/// Round `value` to `decimals` places (at most 15).
///
/// Rounds the exact binary value of `value`, so `2.675` (stored as
/// 2.67499...) goes down. Exact halves go to the even neighbour.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let (mantissa, exponent) = decode(value.abs());
    if exponent >= 0 {
        // No fractional part
        return value;
    }

    let factor = 10u128.pow(decimals.min(15));
    let scaled = mantissa as u128 * factor;
    let shift = exponent.unsigned_abs();

    // scaled < 2^103, so anything shifted this far is below one half
    if shift >= 127 {
        return 0.0f64.copysign(value);
    }

    let quotient = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);

    let rounded = if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    (rounded as f64 / factor as f64).copysign(value)
}

/// Split a positive finite float into `mantissa * 2^exponent`.
fn decode(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);

    if exponent_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent_bits - 1075)
    }
}
