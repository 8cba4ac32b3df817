//! Index entry representation
//!
//! Each entry records one staged change for the next commit:
//! - File path (repository-relative, `/`-separated)
//! - Staged blob id, absent for a pending removal
//! - Change kind (modified, added or pending removal)
//!
//! ## Entry Format
//!
//! One line per entry: `<path> <blob-id> <status>`, where a pending removal
//! writes a placeholder of 40 underscores instead of a blob id and the status
//! digit is `0` (modified), `1` (added) or `2` (pending removal).

use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

const REMOVAL_PLACEHOLDER: char = '_';

/// Kind of change staged for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedChange {
    /// Path already tracked by the head commit, new content staged
    Modified(ObjectId),
    /// Path not tracked by the head commit
    Added(ObjectId),
    /// Path will be dropped from the next commit's tree
    PendingRemoval,
}

impl StagedChange {
    pub fn oid(&self) -> Option<&ObjectId> {
        match self {
            StagedChange::Modified(oid) | StagedChange::Added(oid) => Some(oid),
            StagedChange::PendingRemoval => None,
        }
    }

    pub fn is_pending_removal(&self) -> bool {
        matches!(self, StagedChange::PendingRemoval)
    }

    fn status_digit(&self) -> char {
        match self {
            StagedChange::Modified(_) => '0',
            StagedChange::Added(_) => '1',
            StagedChange::PendingRemoval => '2',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub path: String,
    pub change: StagedChange,
}

impl IndexEntry {
    pub fn to_line(&self) -> String {
        let oid = match self.change.oid() {
            Some(oid) => oid.to_string(),
            None => REMOVAL_PLACEHOLDER.to_string().repeat(OBJECT_ID_LENGTH),
        };

        format!("{} {} {}", self.path, oid, self.change.status_digit())
    }

    /// Parse one index line
    ///
    /// Splits from the right so paths containing spaces survive.
    pub fn parse_line(line: &str) -> VcsResult<Self> {
        let malformed = || VcsError::corrupt("index", format!("malformed index line: {line}"));

        let mut parts = line.rsplitn(3, ' ');
        let (Some(status), Some(oid), Some(path)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if path.is_empty() {
            return Err(malformed());
        }

        let change = match status {
            "2" if oid.len() == OBJECT_ID_LENGTH
                && oid.chars().all(|c| c == REMOVAL_PLACEHOLDER) =>
            {
                StagedChange::PendingRemoval
            }
            "0" => StagedChange::Modified(ObjectId::try_parse(oid).map_err(|_| malformed())?),
            "1" => StagedChange::Added(ObjectId::try_parse(oid).map_err(|_| malformed())?),
            _ => return Err(malformed()),
        };

        Ok(IndexEntry::new(path.to_string(), change))
    }
}
