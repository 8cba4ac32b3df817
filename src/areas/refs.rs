//! Branch pointers, HEAD and the global commit journal
//!
//! ## File Layout
//!
//! - `Branches/<name>`: one line holding the branch head's commit id
//! - `HEAD`: one line naming the current branch pointer (`Branches/<name>`)
//! - `AllCommits`: every commit id ever created, one per line, append-only
//!
//! HEAD written by older tools may hold an absolute path to the branch
//! pointer; only its file name is used.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Name of the HEAD file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Directory holding one pointer file per branch
pub const BRANCHES_DIR: &str = "Branches";

/// Append-only journal of every commit id
pub const JOURNAL_NAME: &str = "AllCommits";

/// Handles reading and writing branch pointers, HEAD and the journal
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.vcs`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(BRANCHES_DIR).into_boxed_path()
    }

    pub fn journal_path(&self) -> Box<Path> {
        self.path.join(JOURNAL_NAME).into_boxed_path()
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.branches_path().join(name.as_ref()).into_boxed_path()
    }

    /// Name of the checked-out branch, as recorded in HEAD
    pub fn current_branch(&self) -> VcsResult<BranchName> {
        let head = std::fs::read_to_string(self.head_path())?;
        let head = head.trim();

        let name = Path::new(head)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| VcsError::corrupt(HEAD_REF_NAME, format!("malformed HEAD {head}")))?;

        BranchName::try_parse(name)
    }

    pub fn set_head(&self, name: &BranchName) -> VcsResult<()> {
        self.update_ref_file(self.head_path(), format!("{BRANCHES_DIR}/{name}"))?;
        info!(branch = %name, "HEAD moved");

        Ok(())
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Commit id the branch points at
    pub fn read_branch(&self, name: &BranchName) -> VcsResult<ObjectId> {
        let content = match std::fs::read_to_string(self.branch_path(name)) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(VcsError::NoSuchBranch(name.to_string()));
            }
            Err(error) => return Err(error.into()),
        };

        ObjectId::try_parse(content.trim())
    }

    /// Point an existing or new branch at `oid`
    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> VcsResult<()> {
        self.update_ref_file(self.branch_path(name), oid.to_string())?;
        info!(branch = %name, %oid, "branch pointer updated");

        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> VcsResult<()> {
        if self.branch_exists(name) {
            return Err(VcsError::BranchExists(name.to_string()));
        }

        self.update_branch(name, oid)
    }

    pub fn delete_branch(&self, name: &BranchName) -> VcsResult<ObjectId> {
        let oid = self.read_branch(name)?;
        std::fs::remove_file(self.branch_path(name))?;
        info!(branch = %name, %oid, "branch deleted");

        Ok(oid)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> VcsResult<Vec<BranchName>> {
        let mut branches = WalkDir::new(self.branches_path())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| BranchName::try_parse(entry.file_name().to_string_lossy()).ok())
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    pub fn append_to_journal(&self, oid: &ObjectId) -> VcsResult<()> {
        let mut journal = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.journal_path())?;
        let mut lock = file_guard::lock(&mut journal, Lock::Exclusive, 0, 1)?;
        writeln!(lock.deref_mut(), "{oid}")?;
        debug!(%oid, "commit journaled");

        Ok(())
    }

    /// Every journaled commit id in creation order
    pub fn read_journal(&self) -> VcsResult<Vec<ObjectId>> {
        let content = match std::fs::read_to_string(self.journal_path()) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(error) => return Err(error.into()),
        };

        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ObjectId::try_parse)
            .collect()
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> VcsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // open the ref file as WRONLY and CREAT to write the new value to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }
}
