use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::index::index_entry::{IndexEntry, StagedChange};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Tree;
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Stage a file, or every file beneath a directory
    ///
    /// A tracked file that no longer exists is staged for removal. Re-adding
    /// content identical to the head commit drops the index entry.
    pub fn add(&mut self, path: impl AsRef<Path>) -> VcsResult<()> {
        let relative = self.workspace().relative_path(path.as_ref())?;
        let head_tree = self.head_tree()?;
        let mut index = self.index_mut();

        if self.workspace().is_file(&relative) {
            self.stage_file(&mut index, &head_tree, &relative)?;
        } else {
            let is_dir = self.workspace().is_dir(&relative);
            let present = if is_dir {
                self.workspace().list_files(Some(&relative))?
            } else {
                Vec::new()
            };
            let missing = head_tree
                .paths()
                .filter(|tracked| is_beneath(tracked, &relative))
                .filter(|tracked| !self.workspace().is_file(tracked))
                .cloned()
                .collect::<Vec<_>>();

            if !is_dir && missing.is_empty() {
                return Err(VcsError::FileNotFound(relative));
            }

            for file in present.iter().chain(missing.iter()) {
                self.stage_file(&mut index, &head_tree, file)?;
            }
        }

        index.write_updates()
    }

    fn stage_file(&self, index: &mut Index, head_tree: &Tree, path: &str) -> VcsResult<()> {
        let committed = head_tree.get(path);

        if !self.workspace().is_file(path) {
            return match committed {
                Some(_) => {
                    debug!(path, "staged removal");
                    index.add(IndexEntry::new(path.to_string(), StagedChange::PendingRemoval));
                    Ok(())
                }
                None => Err(VcsError::FileNotFound(path.to_string())),
            };
        }

        let blob = Blob::new(self.workspace().read_file(path)?);
        let oid = blob.object_id();

        let change = match committed {
            None => StagedChange::Added(oid),
            Some(committed) if *committed == oid => {
                debug!(path, "content matches head commit, unstaged");
                index.remove(path);
                return Ok(());
            }
            Some(_) => StagedChange::Modified(oid),
        };

        self.database().store(&blob)?;
        debug!(path, ?change, "staged file");
        index.add(IndexEntry::new(path.to_string(), change));

        Ok(())
    }
}

/// Whether `path` is `dir` itself or lies beneath it; the empty `dir` is the root
fn is_beneath(path: &str, dir: &str) -> bool {
    dir.is_empty()
        || path == dir
        || path
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
}
