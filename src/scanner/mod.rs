//! Codebase scanner for flag key references
//!
//! Walks a directory tree and records every line containing a flag key as a
//! plain substring. There are no word boundaries: `my-flag` also matches inside
//! `my-flag-v2`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// A single reference to a flag key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLocation {
    pub file_path: String,
    /// 1-based line number
    pub line_number: usize,
}

/// Flag key -> locations, in traversal order then line order.
/// Keys without matches are absent.
pub type SearchResults = BTreeMap<String, Vec<FileLocation>>;

/// Scans text files under a size ceiling for flag keys.
#[derive(Debug, Clone)]
pub struct CodebaseScanner {
    max_file_size_bytes: u64,
}

impl CodebaseScanner {
    pub fn new(max_file_size_mb: u64) -> Self {
        Self {
            max_file_size_bytes: max_file_size_mb.saturating_mul(BYTES_PER_MB),
        }
    }

    /// Search `root` for references to any of `flag_keys`.
    ///
    /// When `extensions` is non-empty only files with one of those extensions
    /// (case-insensitive, leading dot optional) are read. Symlinks are never
    /// followed. Oversized, unreadable and non-UTF-8 files are skipped.
    pub fn search_directory(
        &self,
        root: &Path,
        flag_keys: &[String],
        extensions: &[String],
    ) -> SearchResults {
        let mut results = SearchResults::new();

        let keys: Vec<&str> = flag_keys
            .iter()
            .map(String::as_str)
            .filter(|k| !k.is_empty())
            .collect();
        if keys.is_empty() {
            return results;
        }

        let extensions = normalize_extensions(extensions);

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !matches_extension(entry.path(), &extensions) {
                continue;
            }

            if !self.within_size_limit(&entry) {
                debug!("Skipping oversized file {}", entry.path().display());
                continue;
            }

            self.search_file(entry.path(), &keys, &mut results);
        }

        results
    }

    fn within_size_limit(&self, entry: &DirEntry) -> bool {
        entry
            .metadata()
            .map(|m| m.len() <= self.max_file_size_bytes)
            .unwrap_or(false)
    }

    fn search_file(&self, path: &Path, keys: &[&str], results: &mut SearchResults) {
        let content = match fs::read(path).map(String::from_utf8) {
            Ok(Ok(text)) => text,
            Ok(Err(_)) => {
                debug!("Skipping non-text file {}", path.display());
                return;
            }
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                return;
            }
        };

        let file_path = path.display().to_string();

        for (index, line) in content.lines().enumerate() {
            for key in keys.iter().filter(|key| line.contains(**key)) {
                results
                    .entry((*key).to_string())
                    .or_default()
                    .push(FileLocation {
                        file_path: file_path.clone(),
                        line_number: index + 1,
                    });
            }
        }
    }
}

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }

    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| extensions.contains(&e))
}
