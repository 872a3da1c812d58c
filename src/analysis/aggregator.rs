//! Result aggregation and derived statistics.
//!
//! This module provides utilities for combining results from multiple
//! documents and computing summary statistics over a single result.

use super::analyzer::{round_to, AVERAGE_PRECISION};
use crate::models::{AnalysisResult, WordCount};
use std::collections::{HashMap, HashSet};

/// Combine per-document results into one.
///
/// The combined result is the one `analyze_text` would give for all the
/// documents joined with whitespace, in the order given.
pub fn merge_results(results: &[AnalysisResult]) -> AnalysisResult {
    let mut word_frequency: HashMap<String, usize> = HashMap::new();
    let mut longest_words: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut max_length = 0;
    let mut word_count = 0;

    for result in results {
        word_count += result.word_count;

        for (word, count) in &result.word_frequency {
            *word_frequency.entry(word.clone()).or_default() += count;
        }

        // Each document's list is already deduplicated and of equal length
        let length = result.longest_length();
        if length > max_length {
            max_length = length;
            longest_words.clear();
            seen.clear();
        }
        if length == max_length && length > 0 {
            for word in &result.longest_words {
                if seen.insert(word.as_str()) {
                    longest_words.push(word.clone());
                }
            }
        }
    }

    let mut merged = AnalysisResult {
        word_count,
        average_word_length: 0.0,
        longest_words,
        word_frequency,
    };

    if word_count > 0 {
        merged.average_word_length = round_to(
            merged.total_characters() as f64 / word_count as f64,
            AVERAGE_PRECISION,
        );
    }

    merged
}

/// Get the `n` most frequent words, ties broken alphabetically.
pub fn top_words(result: &AnalysisResult, n: usize) -> Vec<WordCount> {
    let mut ranked: Vec<WordCount> = result
        .word_frequency
        .iter()
        .map(|(word, count)| WordCount {
            word: word.clone(),
            count: *count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(n);

    ranked
}

/// Number of distinct words.
pub fn unique_word_count(result: &AnalysisResult) -> usize {
    result.word_frequency.len()
}

/// Ratio of distinct words to total words, rounded to 4 places.
pub fn lexical_diversity(result: &AnalysisResult) -> f64 {
    if result.word_count == 0 {
        0.0
    } else {
        round_to(
            unique_word_count(result) as f64 / result.word_count as f64,
            4,
        )
    }
}

/// Words that occur exactly once, sorted.
pub fn hapax_legomena(result: &AnalysisResult) -> Vec<String> {
    let mut words: Vec<String> = result
        .word_frequency
        .iter()
        .filter(|(_, count)| **count == 1)
        .map(|(word, _)| word.clone())
        .collect();

    words.sort();
    words
}

/// Generate a text summary of a result.
pub fn generate_summary_text(result: &AnalysisResult, top_n: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Word count: {}", result.word_count));
    lines.push(format!(
        "Average word length: {:.2}",
        result.average_word_length
    ));

    if result.longest_words.is_empty() {
        lines.push("Longest words: (none)".to_string());
    } else {
        lines.push(format!(
            "Longest words ({} chars): {}",
            result.longest_length(),
            result.longest_words.join(", ")
        ));
    }

    lines.push(format!(
        "Unique words: {} (diversity {:.4})",
        unique_word_count(result),
        lexical_diversity(result)
    ));

    let once = hapax_legomena(result);
    if !once.is_empty() {
        lines.push(format!("Words used once: {}", once.len()));
    }

    let top = top_words(result, top_n);
    if !top.is_empty() {
        lines.push(String::new());
        lines.push("Top Words:".to_string());

        for entry in top {
            lines.push(format!("- {}: {}", entry.word, entry.count));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_text;

    #[test]
    fn test_merge_matches_joined_text() {
        let parts = [
            "The quick brown fox",
            "jumps over the lazy dog",
            "",
            "the fox, again!",
        ];

        let results: Vec<AnalysisResult> = parts.iter().map(|p| analyze_text(p)).collect();
        let merged = merge_results(&results);
        let joined = analyze_text(&parts.join(" "));

        assert_eq!(merged, joined);
    }

    #[test]
    fn test_merge_longer_document_resets_longest() {
        let results = vec![analyze_text("cat dog"), analyze_text("elephant ant")];
        let merged = merge_results(&results);

        assert_eq!(merged.longest_words, vec!["elephant"]);
        assert_eq!(merged.word_count, 4);
        // 3 + 3 + 8 + 3 characters over 4 words
        assert_eq!(merged.total_characters(), 17);
        assert_eq!(merged.average_word_length, 4.25);
    }

    #[test]
    fn test_merge_equal_length_keeps_first_seen_order() {
        let results = vec![analyze_text("apple melon"), analyze_text("grape apple")];
        let merged = merge_results(&results);

        assert_eq!(merged.longest_words, vec!["apple", "melon", "grape"]);
        assert_eq!(merged.word_frequency.get("apple"), Some(&2));
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(merge_results(&[]), AnalysisResult::default());
        assert_eq!(
            merge_results(&[AnalysisResult::default(), AnalysisResult::default()]),
            AnalysisResult::default()
        );
    }

    #[test]
    fn test_top_words() {
        let result = analyze_text("b a c b a b d");
        let top = top_words(&result, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0], WordCount { word: "b".to_string(), count: 3 });
        assert_eq!(top[1], WordCount { word: "a".to_string(), count: 2 });
        // c and d tie at 1, alphabetical order wins
        assert_eq!(top[2], WordCount { word: "c".to_string(), count: 1 });

        assert!(top_words(&result, 0).is_empty());
        assert_eq!(top_words(&result, 100).len(), 4);
    }

    #[test]
    fn test_lexical_diversity() {
        assert_eq!(lexical_diversity(&analyze_text("a a b b")), 0.5);
        assert_eq!(lexical_diversity(&analyze_text("one two three")), 1.0);
        assert_eq!(lexical_diversity(&AnalysisResult::default()), 0.0);
    }

    #[test]
    fn test_hapax_legomena() {
        let result = analyze_text("the cat and the hat");
        assert_eq!(hapax_legomena(&result), vec!["and", "cat", "hat"]);
    }

    #[test]
    fn test_generate_summary_text() {
        let result = analyze_text("The quick brown fox jumps over the lazy dog the fox");
        let text = generate_summary_text(&result, 2);

        assert!(text.contains("Word count: 11"));
        assert!(text.contains("Average word length: 3.73"));
        assert!(text.contains("Longest words (5 chars): quick, brown, jumps"));
        assert!(text.contains("Words used once: 6"));
        assert!(text.contains("- the: 3"));
        assert!(text.contains("- fox: 2"));
        assert!(!text.contains("- dog: 1"));
    }

    #[test]
    fn test_generate_summary_text_empty() {
        let text = generate_summary_text(&AnalysisResult::default(), 5);

        assert!(text.contains("Word count: 0"));
        assert!(text.contains("Longest words: (none)"));
        assert!(!text.contains("Words used once"));
        assert!(!text.contains("Top Words:"));
    }
}
