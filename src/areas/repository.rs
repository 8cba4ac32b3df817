//! Repository session
//!
//! A `Repository` is attached to one working directory for the lifetime of a
//! process. It owns the on-disk areas and the session caches: the loaded
//! index, the checked-out branch, its head commit and a read-through commit
//! cache. Commits are immutable, so the cache never needs invalidating.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::tasks::{TASKS_DIR, TaskLedger};
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub const OBJECTS_DIR: &str = "Objects";
pub const INDEX_NAME: &str = "Index";

/// Shortest accepted abbreviation of a commit id
pub const MIN_ABBREVIATED_OID_LENGTH: usize = 4;

pub struct Repository {
    path: Box<Path>,
    config: Config,
    database: Database,
    index: RefCell<Index>,
    workspace: Workspace,
    refs: Refs,
    tasks: TaskLedger,
    current_branch: RefCell<BranchName>,
    head_commit: RefCell<Commit>,
    commits: RefCell<HashMap<ObjectId, Commit>>,
}

impl Repository {
    /// Attach to the repository containing `path`, configured from the environment
    pub fn open(path: impl AsRef<Path>) -> VcsResult<Self> {
        Self::open_with_config(path, Config::load_from_env())
    }

    /// Attach to the repository containing `path`
    ///
    /// `path` may be the working directory root or any directory beneath it.
    pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> VcsResult<Self> {
        let start = path
            .as_ref()
            .canonicalize()
            .map_err(|_| VcsError::NotARepository(path.as_ref().to_path_buf()))?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(METADATA_DIR).is_dir())
            .ok_or_else(|| VcsError::NotARepository(start.clone()))?;

        let repository = Self::assemble(root, config);
        repository.load_session()?;

        Ok(repository)
    }

    pub(crate) fn assemble(root: &Path, config: Config) -> Self {
        let metadata_path = root.join(METADATA_DIR);

        Repository {
            path: root.into(),
            config,
            database: Database::new(metadata_path.join(OBJECTS_DIR).into_boxed_path()),
            index: RefCell::new(Index::new(metadata_path.join(INDEX_NAME).into_boxed_path())),
            workspace: Workspace::new(root.into()),
            refs: Refs::new(metadata_path.clone().into_boxed_path()),
            tasks: TaskLedger::new(metadata_path.join(TASKS_DIR).into_boxed_path()),
            current_branch: RefCell::new(BranchName::default_branch()),
            head_commit: RefCell::new(Commit::root()),
            commits: RefCell::new(HashMap::new()),
        }
    }

    /// Load the index, HEAD and the head commit from disk
    pub(crate) fn load_session(&self) -> VcsResult<()> {
        self.index_mut().rehydrate()?;

        let branch = self.refs.current_branch()?;
        let head = self.head_commit_of(&branch)?;
        debug!(%branch, head = %head.oid(), "session attached");

        self.set_current_branch(branch);
        self.set_head_commit(head);

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn index(&self) -> Ref<'_, Index> {
        self.index.borrow()
    }

    pub fn index_mut(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn tasks(&self) -> &TaskLedger {
        &self.tasks
    }

    pub fn current_branch(&self) -> BranchName {
        self.current_branch.borrow().clone()
    }

    pub(crate) fn set_current_branch(&self, branch: BranchName) {
        *self.current_branch.borrow_mut() = branch;
    }

    /// Head commit of the checked-out branch
    pub fn head_commit(&self) -> Ref<'_, Commit> {
        self.head_commit.borrow()
    }

    pub(crate) fn set_head_commit(&self, commit: Commit) {
        self.commits
            .borrow_mut()
            .insert(commit.oid().clone(), commit.clone());
        *self.head_commit.borrow_mut() = commit;
    }

    /// Load a commit, served from the session cache when possible
    pub fn find_commit(&self, oid: &ObjectId) -> VcsResult<Commit> {
        if let Some(commit) = self.commits.borrow().get(oid) {
            return Ok(commit.clone());
        }

        let data = self.database.load(oid).map_err(|error| match error {
            VcsError::ObjectNotFound(oid) => VcsError::CommitNotFound(oid),
            other => other,
        })?;
        let commit = Commit::deserialize(oid, data)?;

        self.commits
            .borrow_mut()
            .insert(oid.clone(), commit.clone());

        Ok(commit)
    }

    /// Parent of `commit`, `None` at the root
    pub fn parent_commit(&self, commit: &Commit) -> VcsResult<Option<Commit>> {
        commit
            .parent()
            .map(|parent| self.find_commit(parent))
            .transpose()
    }

    pub fn head_commit_of(&self, branch: &BranchName) -> VcsResult<Commit> {
        let oid = self.refs.read_branch(branch)?;

        self.find_commit(&oid)
    }

    /// Snapshot recorded by `commit`; the root's is empty
    pub fn tree_of(&self, commit: &Commit) -> VcsResult<Tree> {
        match commit.tree_oid() {
            Some(tree_oid) => self.database.parse_object_as::<Tree>(tree_oid),
            None => Ok(Tree::default()),
        }
    }

    pub fn head_tree(&self) -> VcsResult<Tree> {
        let head = self.head_commit().clone();

        self.tree_of(&head)
    }

    /// Resolve a full or abbreviated commit id
    pub fn resolve_commit(&self, revision: &str) -> VcsResult<Commit> {
        let revision = revision.trim();
        let not_found = || VcsError::CommitNotFound(revision.to_string());

        if revision.len() < MIN_ABBREVIATED_OID_LENGTH
            || revision.len() > OBJECT_ID_LENGTH
            || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(not_found());
        }

        if revision.len() == OBJECT_ID_LENGTH {
            return self.find_commit(&ObjectId::try_parse(revision)?);
        }

        let mut candidates = self
            .database
            .find_objects_by_prefix(revision)?
            .into_iter()
            .filter_map(|oid| self.find_commit(&oid).ok())
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => Err(not_found()),
            1 => Ok(candidates.remove(0)),
            _ => Err(VcsError::AmbiguousCommit {
                prefix: revision.to_string(),
                candidates: candidates
                    .iter()
                    .map(|commit| commit.oid().to_string())
                    .collect(),
            }),
        }
    }
}
