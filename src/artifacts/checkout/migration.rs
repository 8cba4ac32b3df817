//! Checkout migration and conflict detection
//!
//! Moving the working directory from the current tree to a target commit:
//!
//! 1. Detect untracked files in the way: working files tracked by the target
//!    tree, unknown to the current tree and not staged
//! 2. Plan file system actions (add, delete, modify)
//! 3. Apply them, deletions first
//! 4. Reconcile the task ledger to the target commit's snapshot
//!
//! All conflicts are detected before the first write. The index is left
//! untouched.

use crate::areas::repository::Repository;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    /// Tracked by the target only
    Add,
    /// Tracked by the current tree only
    Delete,
    /// Tracked by both, overwritten with the target's content
    Modify,
}

/// Planned actions grouped by type
pub type ActionsSet = BTreeMap<ActionType, Vec<(String, Option<ObjectId>)>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    current_tree: Tree,
    target_tree: Tree,
    target_tasks: BTreeSet<String>,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(
        repository: &'r Repository,
        current_tree: Tree,
        target_tree: Tree,
        target_tasks: BTreeSet<String>,
    ) -> Self {
        let actions = BTreeMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        Self {
            repository,
            current_tree,
            target_tree,
            target_tasks,
            actions,
        }
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    pub fn apply_changes(&mut self) -> VcsResult<()> {
        self.plan_changes()?;
        self.update_workspace()?;
        self.repository.tasks().reconcile(&self.target_tasks)?;

        Ok(())
    }

    /// Working files that the migration would silently overwrite
    pub fn untracked_conflicts(&self) -> VcsResult<Vec<String>> {
        let index = self.repository.index();

        Ok(self
            .repository
            .workspace()
            .list_files(None)?
            .into_iter()
            .filter(|path| {
                self.target_tree.contains(path)
                    && !self.current_tree.contains(path)
                    && index.entry_by_path(path).is_none()
            })
            .collect())
    }

    fn plan_changes(&mut self) -> VcsResult<()> {
        let conflicts = self.untracked_conflicts()?;
        if !conflicts.is_empty() {
            return Err(VcsError::UntrackedConflict(conflicts));
        }

        let deleted = self
            .current_tree
            .paths()
            .filter(|path| !self.target_tree.contains(path))
            .cloned()
            .collect::<Vec<_>>();
        for path in deleted {
            self.record_action(ActionType::Delete, path, None);
        }

        let target_entries = self
            .target_tree
            .entries()
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect::<Vec<_>>();
        for (path, oid) in target_entries {
            let action = if self.current_tree.contains(&path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            self.record_action(action, path, Some(oid));
        }

        debug!(
            add = self.actions[&ActionType::Add].len(),
            delete = self.actions[&ActionType::Delete].len(),
            modify = self.actions[&ActionType::Modify].len(),
            "planned migration"
        );

        Ok(())
    }

    fn record_action(&mut self, action: ActionType, path: String, oid: Option<ObjectId>) {
        self.actions.entry(action).or_default().push((path, oid));
    }

    // Deletions go first so that a file replaced by a directory (or the other
    // way round) has room to be written.
    fn update_workspace(&self) -> VcsResult<()> {
        let workspace = self.repository.workspace();

        for action in [ActionType::Delete, ActionType::Modify, ActionType::Add] {
            for (path, oid) in self.actions.get(&action).into_iter().flatten() {
                match oid {
                    None => workspace.remove_file(path)?,
                    Some(oid) => {
                        let blob = self.repository.database().parse_object_as::<Blob>(oid)?;
                        workspace.write_file(path, blob.content())?;
                    }
                }
            }
        }

        info!(
            files = self.target_tree.len(),
            tasks = self.target_tasks.len(),
            "working directory migrated"
        );

        Ok(())
    }
}
