//! Blob object
//!
//! Blobs store the raw bytes of one file version, with no header and no
//! metadata. The blob's id is the hash of exactly those bytes, so identical
//! files share one stored object.

use crate::artifacts::core::error::VcsResult;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.content.clone()
    }
}

impl Unpackable for Blob {
    fn deserialize(_oid: &ObjectId, data: Bytes) -> VcsResult<Self> {
        Ok(Self::new(data))
    }
}

impl Object for Blob {}
