//! Content-addressed object store
//!
//! Every blob, tree and commit is stored whole under the hash of its bytes at
//! `.vcs/Objects/<first-2-chars>/<remaining-38-chars>`. Storing is idempotent:
//! an object that already exists is never rewritten.

use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw bytes, returning their id
    pub fn store_bytes(&self, data: &[u8]) -> VcsResult<ObjectId> {
        let oid = ObjectId::hash_bytes(data);
        self.write_if_absent(&oid, data)?;

        Ok(oid)
    }

    pub fn store(&self, object: &impl Object) -> VcsResult<ObjectId> {
        let oid = object.object_id();
        self.write_if_absent(&oid, &object.serialize())?;

        Ok(oid)
    }

    pub fn exists(&self, oid: &ObjectId) -> bool {
        self.path.join(oid.to_path()).is_file()
    }

    pub fn load(&self, oid: &ObjectId) -> VcsResult<Bytes> {
        let object_path = self.path.join(oid.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(VcsError::ObjectNotFound(oid.to_string()))
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn parse_object_as<T: Unpackable>(&self, oid: &ObjectId) -> VcsResult<T> {
        T::deserialize(oid, self.load(oid)?)
    }

    fn write_if_absent(&self, oid: &ObjectId, content: &[u8]) -> VcsResult<()> {
        let object_path = self.path.join(oid.to_path());

        if object_path.exists() {
            debug!(%oid, "object already stored");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| VcsError::corrupt(oid, "object path has no bucket directory"))?;
        std::fs::create_dir_all(object_dir)?;

        self.write_object(object_dir, object_path.clone(), content)?;
        debug!(%oid, bytes = content.len(), "stored object");

        Ok(())
    }

    fn write_object(&self, object_dir: &Path, object_path: PathBuf, content: &[u8]) -> VcsResult<()> {
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)?;
        file.write_all(content)?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose id starts with the given prefix
    ///
    /// Only the bucket named by the first two characters is scanned, so the
    /// prefix must be at least two characters long.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> VcsResult<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.len() < 2 {
            return Ok(Vec::new());
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);
        if !dir_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir_path)? {
            let file_name = entry?.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(file_prefix)
                && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
            {
                matches.push(oid);
            }
        }
        matches.sort();

        Ok(matches)
    }
}
