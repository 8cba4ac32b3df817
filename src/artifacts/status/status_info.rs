use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::FileChange;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub const BRANCHES_HEADER: &str = "=== Branches ===";
pub const STAGED_HEADER: &str = "=== Staged Files ===";
pub const REMOVED_HEADER: &str = "=== Removed Files ===";
pub const MODIFIED_HEADER: &str = "=== Modified Files ===";
pub const UNTRACKED_HEADER: &str = "=== Untracked Files ===";

/// Status report of a repository
///
/// Renders the long format: the branch list (current branch first, marked
/// with `*`) followed by the non-empty file groups.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StatusInfo {
    current_branch: BranchName,
    branches: Vec<BranchName>,
    changes: BTreeMap<String, FileChange>,
}

impl StatusInfo {
    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn branches(&self) -> &[BranchName] {
        &self.branches
    }

    pub fn changes(&self) -> &BTreeMap<String, FileChange> {
        &self.changes
    }

    pub fn change_of(&self, path: &str) -> Option<FileChange> {
        self.changes.get(path).copied()
    }

    /// Paths classified as `change`, sorted
    pub fn files(&self, change: FileChange) -> BTreeSet<&str> {
        self.changes
            .iter()
            .filter(|(_, file_change)| **file_change == change)
            .map(|(path, _)| path.as_str())
            .collect()
    }

    pub fn staged(&self) -> BTreeSet<&str> {
        self.files(FileChange::Staged)
    }

    pub fn removed(&self) -> BTreeSet<&str> {
        self.files(FileChange::Removed)
    }

    /// Unstaged modifications, deletions included
    pub fn modified(&self) -> BTreeSet<&str> {
        self.changes
            .iter()
            .filter(|(_, change)| change.suffix().is_some())
            .map(|(path, _)| path.as_str())
            .collect()
    }

    pub fn untracked(&self) -> BTreeSet<&str> {
        self.files(FileChange::Untracked)
    }

    /// Changes that the next commit would record
    pub fn staged_changes(&self) -> Vec<(&str, FileChange)> {
        self.changes
            .iter()
            .filter(|(_, change)| change.is_staged())
            .map(|(path, change)| (path.as_str(), *change))
            .collect()
    }

    /// Changes the next commit would not record
    pub fn unstaged_changes(&self) -> Vec<(&str, FileChange)> {
        self.changes
            .iter()
            .filter(|(_, change)| !change.is_staged())
            .map(|(path, change)| (path.as_str(), *change))
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }

    /// Branch names with the current one first and marked
    pub fn branch_lines(&self) -> Vec<String> {
        std::iter::once(format!("*{}", self.current_branch))
            .chain(
                self.branches
                    .iter()
                    .filter(|branch| **branch != self.current_branch)
                    .map(BranchName::to_string),
            )
            .collect()
    }

    /// Long-format line for one modified path
    pub fn modified_line(&self, path: &str) -> String {
        match self.change_of(path).and_then(|change| change.suffix()) {
            Some(suffix) => format!("{path} {suffix}"),
            None => path.to_string(),
        }
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{BRANCHES_HEADER}")?;
        for line in self.branch_lines() {
            writeln!(f, "{line}")?;
        }

        let groups = [
            (STAGED_HEADER, self.staged()),
            (REMOVED_HEADER, self.removed()),
            (MODIFIED_HEADER, self.modified()),
            (UNTRACKED_HEADER, self.untracked()),
        ];

        for (header, files) in groups {
            if files.is_empty() {
                continue;
            }

            writeln!(f, "{header}")?;
            for file in files {
                if header == MODIFIED_HEADER {
                    writeln!(f, "{}", self.modified_line(file))?;
                } else {
                    writeln!(f, "{file}")?;
                }
            }
        }

        Ok(())
    }
}
