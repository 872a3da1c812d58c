//! Report generation.
//!
//! This module renders analysis reports as plain text, Markdown, or JSON.

use crate::analysis::{
    generate_summary_text, hapax_legomena, lexical_diversity, unique_word_count,
};
use crate::config::ReportConfig;
use crate::models::{AnalysisResult, AnalyzedDocument, Report, ReportMetadata, WordCount};
use anyhow::Result;
use std::path::Path;

/// Generate a plain text report for the console.
pub fn generate_text_report(report: &Report, config: &ReportConfig) -> String {
    let mut output = generate_summary_text(&report.combined, config.top_words);
    output.push('\n');

    if config.include_documents && report.documents.len() > 1 {
        output.push_str(&format!(
            "\nDocuments ({} with words, {} failed):\n",
            report.documents_with_words(),
            report.metadata.documents_failed
        ));

        for doc in &report.documents {
            match doc.error {
                Some(ref error) => {
                    output.push_str(&format!("- {}: failed ({})\n", doc.path, error));
                }
                None => {
                    output.push_str(&format!("- {}: {}\n", doc.path, doc.result));
                }
            }
        }
    }

    if config.full_frequency {
        output.push_str("\nWord Frequency:\n");
        for entry in sorted_frequency(&report.combined) {
            output.push_str(&format!("- {}: {}\n", entry.word, entry.count));
        }
    }

    output
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report, config: &ReportConfig) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Wordstat Report\n\n");

    output.push_str(&generate_metadata_section(
        &report.metadata,
        report.documents_with_words(),
    ));
    output.push_str(&generate_summary_section(&report.combined));
    output.push_str(&generate_top_words_section(&report.top_words));

    if config.include_documents && report.documents.len() > 1 {
        output.push_str(&generate_documents_section(&report.documents));
    }

    if config.full_frequency {
        output.push_str(&generate_frequency_section(&report.combined));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata, documents_with_words: usize) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push_str(&format!(
        "- **Analysis Date:** {}\n",
        metadata.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Documents Analyzed:** {}\n",
        metadata.documents_analyzed
    ));
    if documents_with_words < metadata.documents_analyzed {
        section.push_str(&format!(
            "- **Documents With Words:** {}\n",
            documents_with_words
        ));
    }
    if metadata.documents_failed > 0 {
        section.push_str(&format!(
            "- **Documents Failed:** {}\n",
            metadata.documents_failed
        ));
    }
    section.push_str(&format!(
        "- **Analysis Duration:** {:.3}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the summary section.
fn generate_summary_section(result: &AnalysisResult) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str(
        "| Words | Unique | Used Once | Average Length | Longest Length | Diversity |\n",
    );
    section.push_str("|:---:|:---:|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} | {} | {:.2} | {} | {:.4} |\n\n",
        result.word_count,
        unique_word_count(result),
        hapax_legomena(result).len(),
        result.average_word_length,
        result.longest_length(),
        lexical_diversity(result)
    ));

    section.push_str("### Longest Words\n\n");
    if result.longest_words.is_empty() {
        section.push_str("No words were found.\n\n");
    } else {
        for word in &result.longest_words {
            section.push_str(&format!("- `{}`\n", word));
        }
        section.push('\n');
    }

    section
}

/// Generate the top words section.
fn generate_top_words_section(top_words: &[WordCount]) -> String {
    if top_words.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Top Words\n\n");
    section.push_str("| Rank | Word | Count |\n");
    section.push_str("|:---:|:---|:---:|\n");

    for (i, entry) in top_words.iter().enumerate() {
        section.push_str(&format!("| {} | `{}` | {} |\n", i + 1, entry.word, entry.count));
    }
    section.push('\n');

    section
}

/// Generate the per-document section.
fn generate_documents_section(documents: &[AnalyzedDocument]) -> String {
    let mut section = String::new();

    section.push_str("## Documents\n\n");
    section.push_str("| Document | Lines | Words | Average Length | Longest Words |\n");
    section.push_str("|:---|:---:|:---:|:---:|:---|\n");

    for doc in documents {
        if let Some(ref error) = doc.error {
            section.push_str(&format!("| `{}` | - | - | - | failed: {} |\n", doc.path, error));
            continue;
        }

        section.push_str(&format!(
            "| `{}` | {} | {} | {:.2} | {} |\n",
            doc.path,
            doc.line_count,
            doc.result.word_count,
            doc.result.average_word_length,
            doc.result.longest_words.join(", ")
        ));
    }
    section.push('\n');

    section
}

/// Generate the full frequency table.
fn generate_frequency_section(result: &AnalysisResult) -> String {
    let mut section = String::new();

    section.push_str("## Word Frequency\n\n");
    section.push_str("| Word | Count |\n");
    section.push_str("|:---|:---:|\n");

    for entry in sorted_frequency(result) {
        section.push_str(&format!("| `{}` | {} |\n", entry.word, entry.count));
    }
    section.push('\n');

    section
}

/// Every word with its count, most frequent first.
fn sorted_frequency(result: &AnalysisResult) -> Vec<WordCount> {
    crate::analysis::top_words(result, result.word_frequency.len())
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str(&format!(
        "*Report generated by wordstat v{}*\n",
        env!("CARGO_PKG_VERSION")
    ));

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Generate the bare analysis record as JSON.
pub fn generate_result_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(Into::into)
}

/// Write rendered report content to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
