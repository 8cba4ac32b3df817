use crate::areas::repository::Repository;
use crate::artifacts::core::error::VcsResult;
use crate::artifacts::status::inspector::Inspector;
use crate::artifacts::status::status_info::StatusInfo;

impl Repository {
    /// Classify every path in the working directory, index and head tree
    pub fn status(&self) -> VcsResult<StatusInfo> {
        let head_tree = self.head_tree()?;
        let index = self.index();

        Inspector::new(self).inspect(&index, &head_tree)
    }
}
