//! Key-value persistence for session state
//!
//! [`SummarizerSession`](crate::session::SummarizerSession) saves its input,
//! sentence count and last output through a [`KeyValueStore`], so the
//! storage backend is injected rather than global.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::errors::{Result, SummarizeError};

/// String key-value persistence
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store; contents are lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// Every `save` rewrites the file: written to a `.tmp` sibling first, then
/// renamed over the original.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| SummarizeError::Store {
                path: path.display().to_string(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %self.path.display(), keys = self.entries.len(), "store flushed");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "v1").unwrap();
        store.save("k", "v2").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save("summarizer.input", "Some text").unwrap();
        store.save("summarizer.length", "4").unwrap();
        assert!(!path.with_extension("tmp").exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.load("summarizer.input").unwrap().as_deref(),
            Some("Some text")
        );
        assert_eq!(reopened.load("summarizer.length").unwrap().as_deref(), Some("4"));
        assert_eq!(reopened.load("missing").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = JsonFileStore::open(dir.path().join("nope.json")).unwrap();
        assert_eq!(missing.load("k").unwrap(), None);

        let empty_path = dir.path().join("empty.json");
        std::fs::write(&empty_path, "  \n").unwrap();
        assert!(JsonFileStore::open(&empty_path).is_ok());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, SummarizeError::Store { .. }));
    }
}
