//! Working directory access
//!
//! All paths handed to and returned from the workspace are repository-relative
//! and `/`-separated, whatever the host platform. The metadata directory is
//! never listed.

use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Name of the metadata directory under the working directory root
pub const METADATA_DIR: &str = ".vcs";

const IGNORED_PATHS: [&str; 3] = [METADATA_DIR, ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository-relative form of `path`
    ///
    /// Relative input is taken relative to the working directory root. The
    /// result is normalized lexically and is empty for the root itself.
    pub fn relative_path(&self, path: &Path) -> VcsResult<String> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in absolute.components() {
            match component {
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(VcsError::OutsideRepository(path.to_path_buf()));
                    }
                }
                Component::CurDir => {}
                other => normalized.push(other),
            }
        }

        let relative = normalized
            .strip_prefix(self.path.as_ref())
            .map_err(|_| VcsError::OutsideRepository(path.to_path_buf()))?;

        if Self::is_ignored(relative) {
            return Err(VcsError::OutsideRepository(path.to_path_buf()));
        }

        Ok(Self::to_slash_path(relative))
    }

    /// Every file under `prefix` (or the whole working directory), sorted
    pub fn list_files(&self, prefix: Option<&str>) -> VcsResult<Vec<String>> {
        let root = match prefix {
            Some(prefix) if !prefix.is_empty() => self.path.join(prefix),
            _ => self.path.to_path_buf(),
        };

        if !root.exists() {
            return Ok(Vec::new());
        }

        WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored_name(entry.file_name()))
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry)),
                Ok(_) => None,
                Err(error) => Some(Err(error)),
            })
            .map(|entry| {
                let entry = entry?;
                let relative = entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .map_err(|_| VcsError::OutsideRepository(entry.path().to_path_buf()))?;

                Ok(Self::to_slash_path(relative))
            })
            .collect()
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.path.join(path).is_file()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        path.is_empty() || self.path.join(path).is_dir()
    }

    pub fn read_file(&self, path: &str) -> VcsResult<Bytes> {
        match std::fs::read(self.path.join(path)) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(VcsError::FileNotFound(path.to_string()))
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Hash a working file without loading it into memory at once
    pub fn hash_file(&self, path: &str) -> VcsResult<ObjectId> {
        let file = std::fs::File::open(self.path.join(path))?;

        ObjectId::hash_reader(std::io::BufReader::new(file))
    }

    /// Write `content` to `path`, creating parent directories as needed
    ///
    /// A directory standing where the file must go is removed first.
    pub fn write_file(&self, path: &str, content: &[u8]) -> VcsResult<()> {
        let file_path = self.path.join(path);

        if file_path.is_dir() {
            std::fs::remove_dir_all(&file_path)?;
        }
        if let Some(parent) = file_path.parent() {
            self.make_directory(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;
        file.write_all(content)?;
        debug!(path, bytes = content.len(), "wrote working file");

        Ok(())
    }

    /// Delete a working file and prune the directories it leaves empty
    pub fn remove_file(&self, path: &str) -> VcsResult<()> {
        let file_path = self.path.join(path);

        match std::fs::remove_file(&file_path) {
            Ok(()) => debug!(path, "removed working file"),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => return Err(error.into()),
        }

        self.prune_empty_parent_dirs(&file_path)
    }

    fn make_directory(&self, dir_path: &Path) -> VcsResult<()> {
        // a file standing where a directory must go is replaced
        for ancestor in dir_path.ancestors() {
            if ancestor == self.path.as_ref() {
                break;
            }
            if ancestor.is_file() {
                std::fs::remove_file(ancestor)?;
                break;
            }
        }

        std::fs::create_dir_all(dir_path)?;

        Ok(())
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> VcsResult<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn is_ignored_name(name: &std::ffi::OsStr) -> bool {
        IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => Self::is_ignored_name(name),
            _ => false,
        })
    }

    fn to_slash_path(path: &Path) -> String {
        path.components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
