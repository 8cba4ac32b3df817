//! Typed failures of the version-control core
//!
//! Every public operation returns [`VcsResult`]. Each concrete failure has its
//! own variant so callers can match on it, while [`VcsError::kind`] folds the
//! variants onto the coarse taxonomy the presentation layer cares about.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`VcsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing object, branch, commit or file
    NotFound,
    /// Branch, task or repository already present
    AlreadyExists,
    /// The operation makes no sense in the current repository state
    InvalidState,
    /// Untracked work would be overwritten
    Conflict,
    /// A stored object could not be parsed
    Corrupt,
    /// The underlying filesystem failed
    IoFailure,
}

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("No object with hash {0} exists")]
    ObjectNotFound(String),

    #[error("No commit with id {0} exists")]
    CommitNotFound(String),

    #[error("Branch \"{0}\" does not exist")]
    NoSuchBranch(String),

    #[error("{0} does not exist")]
    FileNotFound(String),

    #[error("File {0} does not exist in that commit")]
    FileNotInCommit(String),

    #[error("Not a version-controlled directory: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("Path {} is outside the repository", .0.display())]
    OutsideRepository(PathBuf),

    #[error("Branch with name \"{0}\" already exists")]
    BranchExists(String),

    #[error("Task \"{0}\" is already open")]
    TaskAlreadyExists(String),

    #[error("Version Control System already exists in {}", .0.display())]
    RepositoryExists(PathBuf),

    #[error("No changes added to commit")]
    NoChanges,

    #[error("Please enter a commit message")]
    EmptyMessage,

    #[error("No reason to remove file")]
    NothingToRemove,

    #[error("Cannot remove the current branch")]
    CannotRemoveCurrent(String),

    #[error("Invalid {what} \"{name}\": {reason}")]
    InvalidName {
        what: &'static str,
        name: String,
        reason: &'static str,
    },

    #[error("Commit id {prefix} is ambiguous: {} candidates", .candidates.len())]
    AmbiguousCommit {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error(
        "There are untracked files in the way; delete it or add it first.\n{}",
        .0.join("\n")
    )]
    UntrackedConflict(Vec<String>),

    #[error("Corrupt object {oid}: {reason}")]
    Corrupt { oid: String, reason: String },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl VcsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VcsError::ObjectNotFound(_)
            | VcsError::CommitNotFound(_)
            | VcsError::NoSuchBranch(_)
            | VcsError::FileNotFound(_)
            | VcsError::FileNotInCommit(_)
            | VcsError::NotARepository(_) => ErrorKind::NotFound,
            VcsError::BranchExists(_)
            | VcsError::TaskAlreadyExists(_)
            | VcsError::RepositoryExists(_) => ErrorKind::AlreadyExists,
            VcsError::NoChanges
            | VcsError::EmptyMessage
            | VcsError::NothingToRemove
            | VcsError::CannotRemoveCurrent(_)
            | VcsError::InvalidName { .. }
            | VcsError::OutsideRepository(_)
            | VcsError::AmbiguousCommit { .. } => ErrorKind::InvalidState,
            VcsError::UntrackedConflict(_) => ErrorKind::Conflict,
            VcsError::Corrupt { .. } => ErrorKind::Corrupt,
            VcsError::Io(_) => ErrorKind::IoFailure,
        }
    }

    pub(crate) fn corrupt(oid: impl ToString, reason: impl Into<String>) -> Self {
        VcsError::Corrupt {
            oid: oid.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<walkdir::Error> for VcsError {
    fn from(error: walkdir::Error) -> Self {
        match error.into_io_error() {
            Some(io_error) => VcsError::Io(io_error),
            None => VcsError::Io(std::io::Error::other("filesystem loop detected")),
        }
    }
}

pub type VcsResult<T> = Result<T, VcsError>;
