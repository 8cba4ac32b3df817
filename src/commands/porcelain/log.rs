use crate::areas::repository::Repository;
use crate::artifacts::core::error::VcsResult;
use crate::artifacts::objects::commit::Commit;

impl Repository {
    /// Lineage of the current head, newest first, ending with the root commit
    pub fn log(&self) -> VcsResult<Vec<Commit>> {
        let mut commits = Vec::new();
        let mut next = Some(self.head_commit().clone());

        while let Some(commit) = next {
            next = self.parent_commit(&commit)?;
            commits.push(commit);
        }

        Ok(commits)
    }

    /// Every commit ever created, across all branches, in creation order
    pub fn global_log(&self) -> VcsResult<Vec<Commit>> {
        self.refs()
            .read_journal()?
            .iter()
            .map(|oid| self.find_commit(oid))
            .collect()
    }
}
