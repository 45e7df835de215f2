use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::AnimeEntry;

/// Backing storage for the whole collection. Every operation loads it fresh
/// and mutating operations write it back in full.
pub trait RecordStore {
    /// Never fails: a missing or unreadable collection is an empty one.
    fn load(&self) -> Vec<AnimeEntry>;

    fn save(&self, entries: &[AnimeEntry]) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn load(&self) -> Vec<AnimeEntry> {
        (**self).load()
    }

    fn save(&self, entries: &[AnimeEntry]) -> Result<()> {
        (**self).save(entries)
    }
}

/// Collection persisted as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Vec<AnimeEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No readable data at {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        let values: Vec<Value> = match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                debug!("Ignoring malformed data in {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        // Decoded one by one: an undecodable entry is skipped on its own.
        values
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        "Skipping entry {} in {}: {e}",
                        i + 1,
                        self.path.display()
                    );
                    None
                }
            })
            .collect()
    }

    fn save(&self, entries: &[AnimeEntry]) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::RefCell;

    /// In-memory store for exercising the menu flows.
    #[derive(Default)]
    pub struct MemoryStore {
        pub entries: RefCell<Vec<AnimeEntry>>,
        pub saves: RefCell<usize>,
    }

    impl MemoryStore {
        pub fn with(entries: Vec<AnimeEntry>) -> Self {
            Self {
                entries: RefCell::new(entries),
                saves: RefCell::new(0),
            }
        }

        pub fn snapshot(&self) -> Vec<AnimeEntry> {
            self.entries.borrow().clone()
        }
    }

    impl RecordStore for MemoryStore {
        fn load(&self) -> Vec<AnimeEntry> {
            self.entries.borrow().clone()
        }

        fn save(&self, entries: &[AnimeEntry]) -> Result<()> {
            *self.entries.borrow_mut() = entries.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }
}
