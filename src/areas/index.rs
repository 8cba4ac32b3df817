//! Staging index
//!
//! The index records, per path, the change to fold into the next commit's
//! tree. It is loaded at session start, persisted after every mutating call
//! and emptied (not deleted) after a successful commit.
//!
//! ## Locking
//!
//! Reads take a shared lock on the index file, writes an exclusive one.

use crate::artifacts::core::error::VcsResult;
use crate::artifacts::index::index_entry::IndexEntry;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.vcs/Index`)
    path: Box<Path>,
    /// Staged changes mapped by path
    entries: BTreeMap<String, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Load the index from disk, creating an empty file if none exists
    pub fn rehydrate(&mut self) -> VcsResult<()> {
        if !self.path().exists() {
            std::fs::File::create(self.path())?;
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;

        self.entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| IndexEntry::parse_line(line).map(|entry| (entry.path.clone(), entry)))
            .collect::<VcsResult<BTreeMap<_, _>>>()?;
        self.changed = false;

        debug!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.path.clone(), entry);
        self.changed = true;
    }

    pub fn remove(&mut self, path: &str) -> Option<IndexEntry> {
        let removed = self.entries.remove(path);
        self.changed |= removed.is_some();

        removed
    }

    pub fn clear(&mut self) {
        self.changed |= !self.entries.is_empty();
        self.entries.clear();
    }

    /// Persist the entries, skipped when nothing changed since the last load
    /// or write
    pub fn write_updates(&mut self) -> VcsResult<()> {
        if !self.has_changed() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let content = self
            .entries()
            .map(|entry| format!("{}\n", entry.to_line()))
            .collect::<String>();
        lock.deref_mut().write_all(content.as_bytes())?;

        self.changed = false;
        debug!(entries = self.entries.len(), "persisted index");

        Ok(())
    }
}
