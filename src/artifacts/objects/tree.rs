//! Tree object
//!
//! A tree is one complete snapshot of tracked files: a flat mapping from
//! repository-relative path (always `/`-separated) to blob id. Directories are
//! never nested as sub-trees.
//!
//! ## Format
//!
//! One line per entry, sorted by path: `<path> <blob-id>\n`
//!
//! ## Tree Building
//!
//! A new tree starts from the parent commit's mapping and applies the staged
//! index entries on top of it: pending removals drop the path, every other
//! entry upserts it.

use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::index::index_entry::{IndexEntry, StagedChange};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, ObjectId>,
}

impl Tree {
    /// Build a tree from an optional parent snapshot and a set of staged changes
    pub fn build<'e>(
        parent: Option<&Tree>,
        staged: impl IntoIterator<Item = &'e IndexEntry>,
    ) -> Self {
        let mut entries = parent.map(|tree| tree.entries.clone()).unwrap_or_default();

        for entry in staged {
            match &entry.change {
                StagedChange::PendingRemoval => {
                    entries.remove(&entry.path);
                }
                StagedChange::Added(oid) | StagedChange::Modified(oid) => {
                    entries.insert(entry.path.clone(), oid.clone());
                }
            }
        }

        Tree { entries }
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let text = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{path} {oid}\n"))
            .collect::<String>();

        Bytes::from(text)
    }
}

impl Unpackable for Tree {
    fn deserialize(oid: &ObjectId, data: Bytes) -> VcsResult<Self> {
        let text = std::str::from_utf8(&data)
            .map_err(|_| VcsError::corrupt(oid, "tree is not valid UTF-8"))?;

        // split from the right so that paths containing spaces survive
        let entries = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| match line.rsplit_once(' ') {
                Some((path, blob_oid)) if !path.is_empty() => {
                    let blob_oid = ObjectId::try_parse(blob_oid).map_err(|_| {
                        VcsError::corrupt(oid, format!("malformed tree entry: {line}"))
                    })?;
                    Ok((path.to_string(), blob_oid))
                }
                _ => Err(VcsError::corrupt(oid, format!("malformed tree entry: {line}"))),
            })
            .collect::<VcsResult<BTreeMap<_, _>>>()?;

        Ok(Tree { entries })
    }
}

impl Object for Tree {}
