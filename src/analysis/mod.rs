//! Analysis modules.
//!
//! `analyzer` turns a block of text into an [`AnalysisResult`](crate::models::AnalysisResult);
//! `aggregator` combines and summarizes results.

pub mod aggregator;
pub mod analyzer;

pub use aggregator::*;
pub use analyzer::analyze_text;
