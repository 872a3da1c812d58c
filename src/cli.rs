//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wordstat - word statistics for text
///
/// Count words, measure average word length, find the longest words and
/// tally word frequencies for text given inline, read from files and
/// directories, or piped on stdin.
///
/// Examples:
///   wordstat --text "The quick brown fox jumps over the lazy dog"
///   wordstat notes.txt chapters/ --format markdown -o stats.md
///   cat essay.txt | wordstat --format json --top 20
///   wordstat --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Files or directories to analyze
    ///
    /// Directories are walked recursively for files with the configured
    /// extensions. Reads stdin when neither paths nor --text are given.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Analyze this text instead of (or in addition to) files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format (text, markdown, json, raw)
    ///
    /// `raw` prints only the four-field analysis record as JSON.
    #[arg(short, long, value_name = "FORMAT", env = "WORDSTAT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of most frequent words to list
    #[arg(long, value_name = "COUNT")]
    pub top: Option<usize>,

    /// File extensions to include when walking directories (comma-separated)
    ///
    /// Example: --extensions txt,md
    #[arg(long, value_name = "EXTS", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// File or directory names to skip (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Maximum number of files to read from each directory
    #[arg(long, value_name = "COUNT")]
    pub max_files: Option<usize>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .wordstat.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only, no progress bar)
    #[arg(short, long)]
    pub quiet: bool,

    /// Include the complete word frequency table in the report
    #[arg(long)]
    pub full_frequency: bool,

    /// Exit with code 2 when no words are found
    #[arg(long)]
    pub fail_on_empty: bool,

    /// Generate a default .wordstat.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text summary (default)
    #[default]
    Text,
    /// Markdown report
    Markdown,
    /// Full JSON report
    Json,
    /// Bare analysis record as JSON
    Raw,
}

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Inline text from --text
    Inline(String),
    /// A file or directory on disk
    Path(PathBuf),
    /// Standard input
    Stdin,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.top == Some(0) {
            return Err("--top must be at least 1".to_string());
        }

        if self.max_files == Some(0) {
            return Err("--max-files must be at least 1".to_string());
        }

        for path in &self.paths {
            if !path.exists() {
                return Err(format!("Path does not exist: {}", path.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Returns the inputs to analyze, in order.
    pub fn input_sources(&self) -> Vec<InputSource> {
        let mut sources = Vec::new();

        if let Some(ref text) = self.text {
            sources.push(InputSource::Inline(text.clone()));
        }

        sources.extend(self.paths.iter().cloned().map(InputSource::Path));

        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }

        sources
    }

    /// Short human-readable description of the inputs.
    pub fn source_label(&self) -> String {
        let labels: Vec<String> = self
            .input_sources()
            .iter()
            .map(|source| match source {
                InputSource::Inline(_) => "<text>".to_string(),
                InputSource::Path(path) => path.display().to_string(),
                InputSource::Stdin => "<stdin>".to_string(),
            })
            .collect();

        labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["wordstat"];
        argv.extend_from_slice(args);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.paths.is_empty());
        assert!(args.text.is_none());
        assert!(args.top.is_none());
        assert!(!args.full_frequency);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_input_sources() {
        assert_eq!(parse(&[]).input_sources(), vec![InputSource::Stdin]);

        let args = parse(&["--text", "hello world", "a.txt"]);
        assert_eq!(
            args.input_sources(),
            vec![
                InputSource::Inline("hello world".to_string()),
                InputSource::Path(PathBuf::from("a.txt")),
            ]
        );
        assert_eq!(args.source_label(), "<text>, a.txt");
    }

    #[test]
    fn test_parse_format_and_lists() {
        let args = parse(&["--format", "markdown", "--extensions", "txt,md", "--top", "5"]);
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(
            args.extensions,
            Some(vec!["txt".to_string(), "md".to_string()])
        );
        assert_eq!(args.top, Some(5));
    }

    #[test]
    fn test_validation_conflicting_options() {
        let args = parse(&["--verbose", "--quiet"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_zero_limits() {
        assert!(parse(&["--top", "0"]).validate().is_err());
        assert!(parse(&["--max-files", "0"]).validate().is_err());
    }

    #[test]
    fn test_validation_paths() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().to_string_lossy().to_string();
        let missing = temp_dir.path().join("nope.txt").to_string_lossy().to_string();

        assert!(parse(&[existing.as_str()]).validate().is_ok());
        assert!(parse(&[missing.as_str()]).validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&[]);
        assert_eq!(args.log_level(false), tracing::Level::INFO);
        assert_eq!(args.log_level(true), tracing::Level::DEBUG);

        args.verbose = true;
        assert_eq!(args.log_level(false), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(true), tracing::Level::ERROR);
    }
}
