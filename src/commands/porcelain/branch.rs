use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{VcsError, VcsResult};

impl Repository {
    /// Create a branch pointing at the current head commit
    pub fn branch(&mut self, name: &str) -> VcsResult<()> {
        let name = BranchName::try_parse(name)?;
        let head = self.head_commit().oid().clone();

        self.refs().create_branch(&name, &head)
    }

    /// Delete a branch pointer; the checked-out branch cannot be removed
    pub fn remove_branch(&mut self, name: &str) -> VcsResult<()> {
        let name = BranchName::try_parse(name)?;

        if name == self.current_branch() {
            return Err(VcsError::CannotRemoveCurrent(name.to_string()));
        }

        self.refs().delete_branch(&name).map(|_| ())
    }

    pub fn branches(&self) -> VcsResult<Vec<BranchName>> {
        self.refs().list_branches()
    }
}
