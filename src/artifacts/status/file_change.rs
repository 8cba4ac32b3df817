/// Classification of one path in the status report
///
/// Every path present in the working directory, the index or the head
/// commit's tree lands in at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChange {
    /// Staged content matches the working file
    Staged,
    /// Staged for removal and gone from the working directory
    Removed,
    /// Working file differs from what is staged or committed
    Modified,
    /// Tracked or staged, but missing from the working directory
    Deleted,
    /// Neither committed nor staged
    Untracked,
}

impl FileChange {
    /// Two-column code used by `status --short`
    pub fn short_code(&self) -> &'static str {
        match self {
            FileChange::Staged => "A ",
            FileChange::Removed => "D ",
            FileChange::Modified => " M",
            FileChange::Deleted => " D",
            FileChange::Untracked => "??",
        }
    }

    /// Whether the change will be part of the next commit
    pub fn is_staged(&self) -> bool {
        matches!(self, FileChange::Staged | FileChange::Removed)
    }

    /// Suffix shown after unstaged modifications in the long format
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            FileChange::Modified => Some("(modified)"),
            FileChange::Deleted => Some("(deleted)"),
            _ => None,
        }
    }
}
