//! Wordstat - descriptive word statistics for text.
//!
//! The core entry point is [`analyze_text`], a pure function that returns the
//! word count, average word length, longest word(s) and per-word frequency
//! of a block of text:
//!
//! ```
//! let result = wordstat::analyze_text("The quick brown fox jumps over the lazy dog the fox");
//!
//! assert_eq!(result.word_count, 11);
//! assert_eq!(result.longest_words, vec!["quick", "brown", "jumps"]);
//! assert_eq!(result.word_frequency["the"], 3);
//! ```
//!
//! The remaining modules support the `wordstat` command-line tool: reading
//! documents, combining their results, and rendering reports.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod models;
pub mod report;
pub mod scanner;

pub use analysis::analyze_text;
pub use models::{AnalysisResult, AnalyzedDocument, Report, ReportMetadata, WordCount};

use chrono::Utc;

/// Assemble a report from analyzed documents.
pub fn build_report(
    source: String,
    documents: Vec<AnalyzedDocument>,
    top_n: usize,
    duration_seconds: f64,
) -> Report {
    let results: Vec<AnalysisResult> = documents
        .iter()
        .filter(|d| d.analysis_successful)
        .map(|d| d.result.clone())
        .collect();

    let combined = analysis::merge_results(&results);
    let top_words = analysis::top_words(&combined, top_n);

    let metadata = ReportMetadata {
        source,
        analysis_date: Utc::now(),
        documents_analyzed: results.len(),
        documents_failed: documents.len() - results.len(),
        duration_seconds,
    };

    Report {
        metadata,
        documents,
        combined,
        top_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let documents = vec![
            AnalyzedDocument::new("a".to_string(), "Dog dog", analyze_text("Dog dog")),
            AnalyzedDocument::failed("b".to_string(), "unreadable".to_string()),
            AnalyzedDocument::new("c".to_string(), "DOG cat", analyze_text("DOG cat")),
        ];

        let report = build_report("a, b, c".to_string(), documents, 1, 0.5);

        assert_eq!(report.metadata.documents_analyzed, 2);
        assert_eq!(report.metadata.documents_failed, 1);
        assert_eq!(report.combined.word_count, 4);
        assert_eq!(report.combined.word_frequency.get("dog"), Some(&3));
        assert_eq!(
            report.top_words,
            vec![WordCount {
                word: "dog".to_string(),
                count: 3
            }]
        );
        assert_eq!(report.documents_with_words(), 2);
    }

    #[test]
    fn test_build_report_without_documents() {
        let report = build_report("<stdin>".to_string(), Vec::new(), 10, 0.0);

        assert_eq!(report.combined, AnalysisResult::default());
        assert!(report.top_words.is_empty());
        assert_eq!(report.documents_with_words(), 0);
    }

    #[test]
    fn test_sample_fixture() {
        let text = include_str!("../fixtures/sample.txt");
        let result = analyze_text(text);

        assert_eq!(result.word_count, 11);
        assert_eq!(result.average_word_length, 3.73);
        assert_eq!(result.longest_words, vec!["quick", "brown", "jumps"]);
    }
}
