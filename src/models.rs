//! Data models for text analysis.
//!
//! This module contains the core data structures used throughout
//! the application for representing analysis results, documents, and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Statistics computed over a single block of text.
///
/// Field order is stable and mirrored in serialized output: word count,
/// average word length, longest words, word frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of tokens in the text.
    pub word_count: usize,
    /// Mean token length in characters, rounded to 2 decimal places.
    pub average_word_length: f64,
    /// Distinct tokens of maximal length, in order of first appearance.
    pub longest_words: Vec<String>,
    /// Occurrence count of every distinct token.
    pub word_frequency: HashMap<String, usize>,
}

impl AnalysisResult {
    /// Returns true when no words were found.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Length in characters of the longest word(s), 0 if there are none.
    pub fn longest_length(&self) -> usize {
        self.longest_words
            .first()
            .map(|w| w.chars().count())
            .unwrap_or(0)
    }

    /// Total number of characters across all tokens.
    pub fn total_characters(&self) -> usize {
        self.word_frequency
            .iter()
            .map(|(word, count)| word.chars().count() * count)
            .sum()
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, average length {:.2}, longest: [{}]",
            self.word_count,
            self.average_word_length,
            self.longest_words.join(", ")
        )
    }
}

/// One row of a word frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Represents an analyzed input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    /// Path of the document, or a label such as `<stdin>`.
    pub path: String,
    /// Number of characters in the raw document.
    pub char_count: usize,
    /// Number of lines in the raw document.
    pub line_count: usize,
    /// Statistics for this document.
    pub result: AnalysisResult,
    /// Whether the document could be read and analyzed.
    pub analysis_successful: bool,
    /// Error message if the document could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzedDocument {
    /// Creates a document entry from its raw content and computed result.
    pub fn new(path: String, content: &str, result: AnalysisResult) -> Self {
        Self {
            path,
            char_count: content.chars().count(),
            line_count: content.lines().count(),
            result,
            analysis_successful: true,
            error: None,
        }
    }

    /// Creates a failed document entry.
    pub fn failed(path: String, error: String) -> Self {
        Self {
            path,
            char_count: 0,
            line_count: 0,
            result: AnalysisResult::default(),
            analysis_successful: false,
            error: Some(error),
        }
    }
}

/// Metadata about a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Human-readable description of the analyzed inputs.
    pub source: String,
    /// Date and time of the analysis.
    pub analysis_date: DateTime<Utc>,
    /// Number of documents analyzed successfully.
    pub documents_analyzed: usize,
    /// Number of documents that could not be read.
    pub documents_failed: usize,
    /// Duration of the analysis in seconds.
    pub duration_seconds: f64,
}

/// The complete analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Per-document results, in input order.
    pub documents: Vec<AnalyzedDocument>,
    /// Statistics over all documents taken together.
    pub combined: AnalysisResult,
    /// Most frequent words across all documents.
    pub top_words: Vec<WordCount>,
}

impl Report {
    /// Number of documents in the report that contain at least one word.
    pub fn documents_with_words(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.analysis_successful && !d.result.is_empty())
            .count()
    }
}
