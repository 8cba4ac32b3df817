use crate::areas::repository::Repository;
use crate::areas::workspace::METADATA_DIR;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::commit::Commit;
use std::fs;
use std::path::Path;
use tracing::info;

impl Repository {
    /// Create a repository in `path`, configured from the environment
    pub fn init(path: impl AsRef<Path>) -> VcsResult<Self> {
        Self::init_with_config(path, Config::load_from_env())
    }

    /// Create a repository in `path` and attach to it
    ///
    /// The directory is created if missing. The new repository has a single
    /// branch, `master`, pointing at the root commit.
    pub fn init_with_config(path: impl AsRef<Path>, config: Config) -> VcsResult<Self> {
        fs::create_dir_all(path.as_ref())?;
        let root = path.as_ref().canonicalize()?;

        if root.join(METADATA_DIR).exists() {
            return Err(VcsError::RepositoryExists(root));
        }

        let repository = Self::assemble(&root, config);

        fs::create_dir_all(repository.database().objects_path())?;
        fs::create_dir_all(repository.refs().branches_path())?;
        fs::create_dir_all(repository.tasks().path())?;
        fs::write(repository.index().path(), b"")?;
        fs::write(repository.refs().journal_path(), b"")?;

        let root_commit = Commit::root();
        repository.database().store(&root_commit)?;

        let master = BranchName::default_branch();
        repository.refs().update_branch(&master, root_commit.oid())?;
        repository.refs().set_head(&master)?;

        repository.load_session()?;
        info!(path = %root.display(), "initialized repository");

        Ok(repository)
    }
}
