//! Wordstat - word statistics for text
//!
//! A CLI tool that reads text from arguments, files, directories or stdin
//! and reports word count, average word length, longest words and word
//! frequencies.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (unreadable input, bad config, invalid arguments)
//!   2 - No words found and --fail-on-empty set

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wordstat::cli::{Args, InputSource, OutputFormat};
use wordstat::config::{Config, CONFIG_FILE_NAME};
use wordstat::models::AnalyzedDocument;
use wordstat::scanner::{FileScanner, ScanConfig};
use wordstat::{analyze_text, report};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let (mut config, config_path) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    // Initialize logging
    init_logging(args.log_level(config.general.verbose));

    debug!("wordstat v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    match config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    match run(&args, &config) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .wordstat.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging; logs go to stderr so stdout carries only the report.
///
/// `RUST_LOG` takes precedence over the level chosen by -v / -q.
fn init_logging(level: tracing::Level) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(build_log_filter(directives.as_deref(), level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Build the log filter from `RUST_LOG`-style directives, falling back to `level`.
fn build_log_filter(directives: Option<&str>, level: tracing::Level) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

/// Load configuration from file or use defaults.
///
/// Returns the configuration and the path it was read from, if any.
fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Ok((Config::load(config_path)?, Some(config_path.clone())));
    }

    // Try default location
    match Config::load_default()? {
        Some(config) => Ok((config, Some(PathBuf::from(CONFIG_FILE_NAME)))),
        None => Ok((Config::default(), None)),
    }
}

/// Run the analysis and emit the report. Returns exit code (0 or 2).
fn run(args: &Args, config: &Config) -> Result<i32> {
    let start_time = Instant::now();

    let scan_config = ScanConfig::from(&config.scanner);
    let documents = collect_documents(&args.input_sources(), &scan_config, !args.quiet)?;

    if documents.is_empty() {
        warn!("No matching documents found");
    }

    let duration = start_time.elapsed().as_secs_f64();
    let report = wordstat::build_report(
        args.source_label(),
        documents,
        config.report.top_words,
        duration,
    );

    info!(
        "Analyzed {} document(s): {} words, {} unique",
        report.metadata.documents_analyzed,
        report.combined.word_count,
        report.combined.word_frequency.len()
    );

    let output = match config.general.format {
        OutputFormat::Text => report::generate_text_report(&report, &config.report),
        OutputFormat::Markdown => report::generate_markdown_report(&report, &config.report),
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Raw => report::generate_result_json(&report.combined)?,
    };

    match args.output {
        Some(ref path) => {
            report::write_report(&output, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => {
            println!("{}", output.trim_end());
        }
    }

    if config.general.fail_on_empty && report.combined.is_empty() {
        warn!("No words found. Failing (exit code 2).");
        return Ok(2);
    }

    Ok(0)
}

/// Read and analyze every input, in order.
///
/// Files that cannot be read are recorded as failed documents; a missing
/// path or an unreadable stdin aborts the run.
fn collect_documents(
    sources: &[InputSource],
    scan_config: &ScanConfig,
    show_progress: bool,
) -> Result<Vec<AnalyzedDocument>> {
    let mut pending: Vec<(String, Result<String>)> = Vec::new();

    // Labels are relative to their root, so keep roots apart when there are several
    let prefix_roots = sources
        .iter()
        .filter(|source| matches!(source, InputSource::Path(_)))
        .count()
        > 1;

    for source in sources {
        match source {
            InputSource::Inline(text) => {
                pending.push(("<text>".to_string(), Ok(text.clone())));
            }
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read from stdin")?;
                pending.push(("<stdin>".to_string(), Ok(text)));
            }
            InputSource::Path(path) => {
                let file_scanner = FileScanner::new(path.clone(), scan_config.clone());
                let files = file_scanner
                    .scan()
                    .with_context(|| format!("Failed to scan {}", path.display()))?;
                debug!("Found {} file(s) under {}", files.len(), path.display());

                for file in files {
                    let content = file_scanner.read(&file).map_err(anyhow::Error::from);
                    let label = if prefix_roots && path.is_dir() {
                        path.join(&file.path).display().to_string()
                    } else {
                        file.path
                    };
                    pending.push((label, content));
                }
            }
        }
    }

    let progress_bar = if show_progress && pending.len() > 1 {
        let pb = ProgressBar::new(pending.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut documents = Vec::with_capacity(pending.len());

    for (path, content) in pending {
        if let Some(ref pb) = progress_bar {
            pb.set_message(path.clone());
        }

        let document = match content {
            Ok(text) => {
                let result = analyze_text(&text);
                AnalyzedDocument::new(path, &text, result)
            }
            Err(e) => {
                warn!("{:#}", e);
                AnalyzedDocument::failed(path, format!("{:#}", e))
            }
        };
        documents.push(document);

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
    }

    #[test]
    fn test_collect_documents_from_fixtures() {
        let sources = vec![
            InputSource::Inline("Dog dog DOG".to_string()),
            InputSource::Path(fixture("sample.txt")),
            InputSource::Path(fixture("punctuation.txt")),
        ];

        let documents = collect_documents(&sources, &ScanConfig::default(), false).unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].path, "<text>");
        assert_eq!(documents[0].result.word_count, 3);
        assert_eq!(documents[1].result.word_count, 11);
        assert_eq!(documents[2].result.word_count, 16);
        assert_eq!(documents[2].result.word_frequency.get("dog"), Some(&4));
        assert_eq!(documents[2].line_count, 3);
    }

    #[test]
    fn test_collect_documents_records_unreadable_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("good.txt"), "hello there").unwrap();
        std::fs::write(temp_dir.path().join("bad.txt"), [0xff, 0xfe]).unwrap();

        let sources = vec![InputSource::Path(temp_dir.path().to_path_buf())];
        let documents = collect_documents(&sources, &ScanConfig::default(), false).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].path, "bad.txt");
        assert!(!documents[0].analysis_successful);
        assert_eq!(documents[1].path, "good.txt");
        assert_eq!(documents[1].result.word_count, 2);
    }

    #[test]
    fn test_collect_documents_labels_files_by_root() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        std::fs::create_dir(&first).unwrap();
        std::fs::create_dir(&second).unwrap();
        std::fs::write(first.join("notes.txt"), "one").unwrap();
        std::fs::write(second.join("notes.txt"), "two words").unwrap();

        let sources = vec![
            InputSource::Path(first.clone()),
            InputSource::Path(second.clone()),
        ];
        let documents = collect_documents(&sources, &ScanConfig::default(), false).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].path, first.join("notes.txt").display().to_string());
        assert_eq!(documents[1].path, second.join("notes.txt").display().to_string());
        assert_ne!(documents[0].path, documents[1].path);

        // A single directory keeps short labels
        let documents =
            collect_documents(&[InputSource::Path(first)], &ScanConfig::default(), false).unwrap();
        assert_eq!(documents[0].path, "notes.txt");
    }

    #[test]
    fn test_build_log_filter() {
        let filter = build_log_filter(None, tracing::Level::DEBUG);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_log_filter(Some("warn"), tracing::Level::DEBUG);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        // Unparseable directives fall back to the CLI level
        let filter = build_log_filter(Some("wordstat=loud"), tracing::Level::ERROR);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_collect_documents_missing_path() {
        let sources = vec![InputSource::Path(fixture("does-not-exist.txt"))];
        assert!(collect_documents(&sources, &ScanConfig::default(), false).is_err());
    }
}
