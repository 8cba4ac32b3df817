use crate::areas::repository::Repository;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::index::index_entry::{IndexEntry, StagedChange};
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Unstage an untracked file, or stage a tracked one for removal
    ///
    /// Removing a tracked file also deletes it from the working directory.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> VcsResult<()> {
        let relative = self.workspace().relative_path(path.as_ref())?;
        let head_tree = self.head_tree()?;
        let mut index = self.index_mut();

        if !head_tree.contains(&relative) {
            if index.remove(&relative).is_none() {
                return Err(VcsError::NothingToRemove);
            }
            debug!(path = %relative, "unstaged file");
        } else {
            self.workspace().remove_file(&relative)?;
            index.add(IndexEntry::new(relative.clone(), StagedChange::PendingRemoval));
            debug!(path = %relative, "staged removal");
        }

        index.write_updates()
    }
}
