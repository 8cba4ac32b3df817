use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use std::path::Path;
use tracing::info;

impl Repository {
    /// Restore a file to its content in the head commit
    pub fn checkout_file(&mut self, path: impl AsRef<Path>) -> VcsResult<()> {
        let head = self.head_commit().clone();

        self.restore_file(&head, path.as_ref())
    }

    /// Restore a file to its content in the commit named by a full or
    /// abbreviated id
    pub fn checkout_file_at(&mut self, revision: &str, path: impl AsRef<Path>) -> VcsResult<()> {
        let commit = self.resolve_commit(revision)?;

        self.restore_file(&commit, path.as_ref())
    }

    /// Switch the working directory, task ledger and HEAD to another branch
    ///
    /// Fails without touching anything when untracked files are in the way.
    pub fn checkout_branch(&mut self, name: &str) -> VcsResult<()> {
        let branch = BranchName::try_parse(name)?;
        let target = self.head_commit_of(&branch)?;

        self.migrate_to(&target)?;
        self.refs().set_head(&branch)?;

        info!(%branch, head = %target.oid(), "switched branch");
        self.set_current_branch(branch);
        self.set_head_commit(target);

        Ok(())
    }

    fn restore_file(&self, commit: &Commit, path: &Path) -> VcsResult<()> {
        let relative = self.workspace().relative_path(path)?;
        let tree = self.tree_of(commit)?;

        let oid = tree
            .get(&relative)
            .ok_or_else(|| VcsError::FileNotInCommit(relative.clone()))?;
        let blob = self.database().parse_object_as::<Blob>(oid)?;

        self.workspace().write_file(&relative, blob.content())?;
        info!(path = %relative, commit = %commit.oid(), "restored file");

        Ok(())
    }

    /// Rewrite the working directory and task ledger to match `target`
    pub(crate) fn migrate_to(&self, target: &Commit) -> VcsResult<()> {
        let current_tree = self.head_tree()?;
        let target_tree = self.tree_of(target)?;

        let mut migration = Migration::new(
            self,
            current_tree,
            target_tree,
            target.active_tasks().clone(),
        );

        migration.apply_changes()
    }
}
