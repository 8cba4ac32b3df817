//! Staging index file format
//!
//! The index is the staging area: it records, per path, the change to apply
//! on top of the head commit's tree when the next commit is built.
//!
//! ## File Format
//!
//! ```text
//! <path> <blob-id> <status>
//! ...
//! ```
//!
//! One entry per line, sorted by path. An empty file is an empty index.

pub mod index_entry;
