use crate::areas::repository::Repository;
use crate::artifacts::core::error::VcsResult;
use tracing::info;

impl Repository {
    /// Discard uncommitted working-tree edits by re-applying the head commit
    pub fn reset(&mut self) -> VcsResult<()> {
        let head = self.head_commit().clone();

        self.migrate_to(&head)
    }

    /// Move the current branch to another commit and check it out
    ///
    /// Accepts a full or abbreviated commit id. HEAD keeps naming the same
    /// branch.
    pub fn reset_to(&mut self, revision: &str) -> VcsResult<()> {
        let target = self.resolve_commit(revision)?;
        let branch = self.current_branch();

        self.migrate_to(&target)?;
        self.refs().update_branch(&branch, target.oid())?;

        info!(%branch, head = %target.oid(), "branch reset");
        self.set_head_commit(target);

        Ok(())
    }
}
