//! Task ledger
//!
//! An open task is a zero-byte marker file `.vcs/Tasks/<name>`. The markers
//! mirror the active task snapshot of the checked-out commit; commits are the
//! source of truth and the ledger is reconciled to them on checkout and reset.

use crate::artifacts::core::error::VcsResult;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Directory holding one marker file per open task
pub const TASKS_DIR: &str = "Tasks";

#[derive(Debug, new)]
pub struct TaskLedger {
    /// Path to the tasks directory (`.vcs/Tasks`)
    path: Box<Path>,
}

impl TaskLedger {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of every open task marker
    pub fn active(&self) -> VcsResult<BTreeSet<String>> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }

        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    Some(Ok(entry.file_name().to_string_lossy().to_string()))
                }
                Ok(_) => None,
                Err(error) => Some(Err(error.into())),
            })
            .collect()
    }

    pub fn open(&self, name: &str) -> VcsResult<()> {
        std::fs::create_dir_all(&self.path)?;
        std::fs::File::create(self.path.join(name))?;
        info!(task = name, "task opened");

        Ok(())
    }

    pub fn close(&self, name: &str) -> VcsResult<()> {
        match std::fs::remove_file(self.path.join(name)) {
            Ok(()) => {
                info!(task = name, "task closed");
                Ok(())
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    /// Make the markers match `snapshot` exactly
    pub fn reconcile(&self, snapshot: &BTreeSet<String>) -> VcsResult<()> {
        let active = self.active()?;

        for stale in active.difference(snapshot) {
            self.close(stale)?;
        }
        for missing in snapshot.difference(&active) {
            self.open(missing)?;
        }

        Ok(())
    }
}
