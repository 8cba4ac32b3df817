use crate::artifacts::core::error::VcsResult;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Bytes;
}

pub trait Unpackable {
    /// Rebuild an object from the bytes stored under `oid`
    fn deserialize(oid: &ObjectId, data: Bytes) -> VcsResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_id(&self) -> ObjectId {
        ObjectId::hash_bytes(&self.serialize())
    }
}
