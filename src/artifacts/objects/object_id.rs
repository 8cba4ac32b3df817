//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They identify
//! blobs, trees and commits alike and double as the objects' names.
//!
//! ## Storage
//!
//! Objects are stored in `.vcs/Objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use sha1::{Digest, Sha1};
use std::io::Read;
use std::path::PathBuf;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Object identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase input is normalized to lowercase.
    pub fn try_parse(id: impl AsRef<str>) -> VcsResult<Self> {
        let id = id.as_ref();

        if id.len() != OBJECT_ID_LENGTH {
            return Err(VcsError::corrupt(
                id,
                format!("invalid object id length {}", id.len()),
            ));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(VcsError::corrupt(id, "invalid object id characters"));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Hash raw bytes
    pub fn hash_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Hash UTF-8 text (the serialized form of trees and commits)
    pub fn hash_str(text: &str) -> Self {
        Self::hash_bytes(text.as_bytes())
    }

    /// Hash everything a reader yields, a chunk at a time
    pub fn hash_reader(mut reader: impl Read) -> VcsResult<Self> {
        let mut hasher = Sha1::new();
        let mut buffer = [0u8; READ_CHUNK_SIZE];

        loop {
            let read = reader.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
