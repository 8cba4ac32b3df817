use crate::areas::repository::Repository;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::commit::{Commit, CommitRecord, SECTION_DELIMITER};
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::tasks::task_name::TaskName;
use std::collections::BTreeSet;
use tracing::info;

impl Repository {
    /// Record the staged changes as a new commit on the current branch
    ///
    /// `open_tasks` must not already be open; the new active task snapshot is
    /// `(previously active ∪ opened) − closed`. An empty `author` falls back to
    /// the configured one. On success the index is emptied.
    pub fn commit(
        &mut self,
        message: &str,
        author: &str,
        close_tasks: &[&str],
        open_tasks: &[&str],
    ) -> VcsResult<Commit> {
        if self.index().is_empty() {
            return Err(VcsError::NoChanges);
        }
        if message.is_empty() {
            return Err(VcsError::EmptyMessage);
        }
        if message.lines().any(|line| line == SECTION_DELIMITER) {
            return Err(VcsError::InvalidName {
                what: "commit message",
                name: message.to_string(),
                reason: "a line may not consist of the section delimiter",
            });
        }

        let author = match author.trim() {
            "" => self.config().author_name().to_string(),
            author => author.to_string(),
        };
        if author.contains(['\n', '\r']) {
            return Err(VcsError::InvalidName {
                what: "author",
                name: author,
                reason: "must fit on a single line",
            });
        }

        let opened = Self::parse_task_names(open_tasks)?;
        let closed = Self::parse_task_names(close_tasks)?;

        let head = self.head_commit().clone();
        let prior = head.active_tasks();
        if let Some(task) = opened.iter().find(|task| prior.contains(*task)) {
            return Err(VcsError::TaskAlreadyExists(task.clone()));
        }

        let active = prior
            .union(&opened)
            .filter(|task| !closed.contains(*task))
            .cloned()
            .collect::<BTreeSet<_>>();

        let tree = Tree::build(Some(&self.tree_of(&head)?), self.index().entries());
        let tree_oid = self.database().store(&tree)?;

        let branch = self.current_branch();
        let commit = Commit::from_record(CommitRecord::new(
            tree_oid,
            head.oid().clone(),
            self.config().commit_timestamp(),
            author,
            branch.to_string(),
            message.to_string(),
            opened,
            closed,
            active,
        ));
        self.database().store(&commit)?;

        self.tasks().reconcile(commit.active_tasks())?;
        self.refs().update_branch(&branch, commit.oid())?;
        self.refs().append_to_journal(commit.oid())?;
        {
            let mut index = self.index_mut();
            index.clear();
            index.write_updates()?;
        }

        info!(oid = %commit.oid(), %branch, "created commit");
        self.set_head_commit(commit.clone());

        Ok(commit)
    }

    fn parse_task_names(names: &[&str]) -> VcsResult<BTreeSet<String>> {
        names
            .iter()
            .map(|name| TaskName::try_parse(*name).map(TaskName::into_inner))
            .collect()
    }
}
