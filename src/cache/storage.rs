//! File-backed cache storage
//!
//! One JSON file per project: `{ "timestamp": <epoch seconds>, "data": <payload> }`.
//! Writes go through a temp file in the same directory and are renamed into
//! place, so an interrupted write never clobbers a valid entry.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::config::CACHE_DIR_ENV;
use crate::error::CacheError;

type Result<T> = std::result::Result<T, CacheError>;

const CACHE_EXTENSION: &str = "json";

/// On-disk representation of a cache entry.
#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    timestamp: f64,
    data: Value,
}

/// Metadata about a stored entry, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntryInfo {
    pub project: String,
    /// When the entry was written (epoch seconds)
    pub timestamp: f64,
    pub age_seconds: f64,
    /// Negative once the entry has expired
    pub expires_in_seconds: f64,
    pub is_expired: bool,
}

/// TTL-bounded, per-project flag cache.
#[derive(Debug, Clone)]
pub struct FlagCache {
    dir: PathBuf,
    ttl: Duration,
}

impl FlagCache {
    /// Cache at the default per-user location.
    pub fn open(ttl: Duration) -> Result<Self> {
        Ok(Self::at(Self::cache_dir()?, ttl))
    }

    /// Cache rooted at a specific directory (for testing).
    pub fn at(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// `$LDAUDIT_CACHE_DIR`, or `~/.cache/ldaudit` (platform equivalent).
    pub fn cache_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CACHE_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoCacheDir)?;
        Ok(cache_base.join("ldaudit"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Payload for `project` if present and younger than the TTL.
    pub fn get(&self, project: &str) -> Option<Value> {
        self.get_at(project, now_seconds())
    }

    /// [`FlagCache::get`] against an explicit clock (epoch seconds).
    ///
    /// Missing, expired, unreadable and corrupt entries all read as `None`.
    /// Expired files are left on disk.
    pub fn get_at(&self, project: &str, now: f64) -> Option<Value> {
        if project.is_empty() {
            return None;
        }

        let path = self.entry_path(project);
        let entry = match read_entry(&path) {
            Some(entry) => entry,
            None => {
                log::debug!("Cache miss: {}", project);
                return None;
            }
        };

        if now - entry.timestamp < self.ttl.as_secs_f64() {
            Some(entry.data)
        } else {
            log::debug!("Cache expired: {}", project);
            None
        }
    }

    /// Replace the entry for `project`, stamped with the current time.
    pub fn set(&self, project: &str, payload: &Value) -> Result<()> {
        self.set_at(project, payload, now_seconds())
    }

    /// [`FlagCache::set`] with an explicit timestamp (epoch seconds).
    pub fn set_at(&self, project: &str, payload: &Value, timestamp: f64) -> Result<()> {
        if project.is_empty() {
            return Err(CacheError::EmptyProject);
        }

        fs::create_dir_all(&self.dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let entry = CacheFile {
            timestamp,
            data: payload.clone(),
        };
        let bytes = serde_json::to_vec(&entry)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| CacheError::Io(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| CacheError::Io(format!("Failed to write cache entry: {}", e)))?;
        tmp.persist(self.entry_path(project))
            .map_err(|e| CacheError::Io(format!("Failed to persist cache entry: {}", e)))?;

        Ok(())
    }

    /// Delete every entry. A missing cache directory is not an error.
    pub fn clear_all(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(CacheError::Io(format!("Failed to read cache dir: {}", e))),
        };

        let mut removed = 0;
        for path in entries.filter_map(|e| e.ok()).map(|e| e.path()) {
            if is_cache_file(&path) {
                fs::remove_file(&path)
                    .map_err(|e| CacheError::Io(format!("Failed to remove {}: {}", path.display(), e)))?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// All readable entries sorted by project name.
    pub fn list_entries(&self) -> Vec<CacheEntryInfo> {
        self.list_entries_at(now_seconds())
    }

    /// [`FlagCache::list_entries`] against an explicit clock. Corrupt entries are skipped.
    pub fn list_entries_at(&self, now: f64) -> Vec<CacheEntryInfo> {
        let Ok(dir) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        let mut paths: Vec<PathBuf> = dir
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| is_cache_file(p))
            .collect();
        paths.sort();

        let ttl = self.ttl.as_secs_f64();
        paths
            .iter()
            .filter_map(|path| {
                let project = decode_project(path.file_stem()?.to_str()?);
                let entry = read_entry(path)?;
                let age_seconds = now - entry.timestamp;
                let expires_in_seconds = ttl - age_seconds;
                Some(CacheEntryInfo {
                    project,
                    timestamp: entry.timestamp,
                    age_seconds,
                    expires_in_seconds,
                    is_expired: expires_in_seconds <= 0.0,
                })
            })
            .collect()
    }

    fn entry_path(&self, project: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", encode_project(project), CACHE_EXTENSION))
    }
}

/// File stem for a project. `%`, `/` and `\` are percent-escaped so distinct
/// projects never share a file and no name can leave the cache dir.
fn encode_project(project: &str) -> String {
    let mut encoded = String::with_capacity(project.len());
    for c in project.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '/' => encoded.push_str("%2F"),
            '\\' => encoded.push_str("%5C"),
            _ => encoded.push(c),
        }
    }
    encoded
}

/// Inverse of [`encode_project`].
fn decode_project(stem: &str) -> String {
    stem.replace("%2F", "/")
        .replace("%5C", "\\")
        .replace("%25", "%")
}

fn now_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

fn is_cache_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(CACHE_EXTENSION)
}

fn read_entry(path: &Path) -> Option<CacheFile> {
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Ignoring corrupt cache entry {}: {}", path.display(), e);
            None
        }
    }
}
