//! Stored object types
//!
//! All content lives in the object store as immutable objects identified by
//! the SHA-1 hash of their serialized bytes. There are three kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Flat snapshot mapping paths to blob ids
//! - **Commit**: History node (tree, parent, metadata, task transitions)
//!
//! Objects carry no type header; the caller knows what it is loading.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
