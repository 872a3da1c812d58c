//! File scanner for discovering and reading text documents.
//!
//! This module provides a file scanner that respects configuration
//! for extensions, excludes, and file size limits.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Errors raised while discovering or reading documents.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for file scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File extensions to include (e.g., ["txt", "md"])
    pub extensions: Vec<String>,
    /// Names to exclude (e.g., ["target", ".git"])
    pub excludes: Vec<String>,
    /// Maximum file size in bytes
    pub max_file_size: u64,
    /// Maximum number of files to scan
    pub max_files: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from(&crate::config::ScannerConfig::default())
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            excludes: config.excludes.clone(),
            max_file_size: config.max_file_size,
            max_files: config.max_files,
        }
    }
}

/// Scanned file information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path as it should be reported
    pub path: String,
    /// Absolute or caller-relative location on disk
    pub location: PathBuf,
    /// File size in bytes
    pub size: u64,
}

/// File scanner for discovering text documents.
pub struct FileScanner {
    config: ScanConfig,
    root: PathBuf,
}

impl FileScanner {
    /// Create a new file scanner.
    pub fn new(root: PathBuf, config: ScanConfig) -> Self {
        Self { config, root }
    }

    /// Scan for all matching files.
    ///
    /// A root that is itself a file is returned without extension filtering.
    pub fn scan(&self) -> Result<Vec<ScannedFile>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }

        if self.root.is_file() {
            let metadata = fs::metadata(&self.root).map_err(|source| ScanError::Io {
                path: self.root.clone(),
                source,
            })?;
            return Ok(vec![ScannedFile {
                path: self.root.display().to_string(),
                location: self.root.clone(),
                size: metadata.len(),
            }]);
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry));

        for entry in walker {
            if let Some(max) = self.config.max_files {
                if files.len() >= max {
                    debug!("Reached max_files limit of {}", max);
                    break;
                }
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping directory entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.matches_extension(entry.path()) {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            if size > self.config.max_file_size {
                debug!("Skipping {} ({} bytes over limit)", entry.path().display(), size);
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            files.push(ScannedFile {
                path: relative.to_string_lossy().to_string(),
                location: entry.path().to_path_buf(),
                size,
            });
        }

        Ok(files)
    }

    /// Read a scanned file as UTF-8 text.
    pub fn read(&self, file: &ScannedFile) -> Result<String, ScanError> {
        fs::read_to_string(&file.location).map_err(|source| ScanError::Io {
            path: file.location.clone(),
            source,
        })
    }

    /// Check if a path has one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        self.config.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }

    /// Check if an entry is hidden or matches an exclusion name.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') {
            return true;
        }

        self.config.excludes.iter().any(|pattern| name == pattern.as_str())
    }
}
