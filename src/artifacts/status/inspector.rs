//! Status classification
//!
//! Rules per working file `p`:
//!
//! 1. `p` has an index entry: a pending removal reports `p` as untracked
//!    (the file reappeared); a staged hash equal to the disk hash is staged;
//!    anything else is modified.
//! 2. `p` is tracked by the head tree with a different hash: modified.
//! 3. `p` is not tracked by the head tree: untracked.
//!
//! Index entries without a working file are removed (pending removal) or
//! deleted; head tree paths with neither are deleted.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::VcsResult;
use crate::artifacts::index::index_entry::{IndexEntry, StagedChange};
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::status_info::StatusInfo;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    pub fn inspect(&self, index: &Index, head_tree: &Tree) -> VcsResult<StatusInfo> {
        let mut changes = BTreeMap::new();
        let mut pending_index = index
            .entries()
            .map(|entry| entry.path.as_str())
            .collect::<BTreeSet<_>>();
        let mut pending_head = head_tree.paths().map(String::as_str).collect::<BTreeSet<_>>();

        let working_files = self.repository.workspace().list_files(None)?;
        for path in &working_files {
            if let Some(change) =
                self.check_working_file(path, index.entry_by_path(path), head_tree)?
            {
                changes.insert(path.clone(), change);
            }

            pending_index.remove(path.as_str());
            pending_head.remove(path.as_str());
        }

        for path in pending_index {
            let change = match index.entry_by_path(path).map(|entry| &entry.change) {
                Some(StagedChange::PendingRemoval) => FileChange::Removed,
                _ => FileChange::Deleted,
            };
            changes.insert(path.to_string(), change);
            pending_head.remove(path);
        }

        for path in pending_head {
            changes.insert(path.to_string(), FileChange::Deleted);
        }

        Ok(StatusInfo::new(
            self.repository.current_branch(),
            self.repository.refs().list_branches()?,
            changes,
        ))
    }

    fn check_working_file(
        &self,
        path: &str,
        entry: Option<&IndexEntry>,
        head_tree: &Tree,
    ) -> VcsResult<Option<FileChange>> {
        if let Some(entry) = entry {
            let change = match entry.change.oid() {
                None => FileChange::Untracked,
                Some(staged) if *staged == self.repository.workspace().hash_file(path)? => {
                    FileChange::Staged
                }
                Some(_) => FileChange::Modified,
            };

            return Ok(Some(change));
        }

        match head_tree.get(path) {
            Some(committed) if *committed != self.repository.workspace().hash_file(path)? => {
                Ok(Some(FileChange::Modified))
            }
            Some(_) => Ok(None),
            None => Ok(Some(FileChange::Untracked)),
        }
    }
}
