//! Commit object
//!
//! Commits are immutable history nodes. Each one references a tree snapshot,
//! at most one parent, the branch it was created on, and the task-ledger
//! transition it recorded.
//!
//! ## Format
//!
//! ```text
//! <tree-id>
//! <parent-id or empty line>
//! <MM/dd/yyyy HH:mm:ss>
//! <author>
//! <branch>
//! ===
//! <opened task>...
//! ===
//! <closed task>...
//! ===
//! <active task snapshot>...
//! ===
//! <message>
//! ===
//! ```
//!
//! The distinguished root commit is stored as an empty object. It has no
//! parent and an empty tree, and terminates every parent walk.

use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use chrono::NaiveDateTime;
use derive_new::new;
use std::collections::BTreeSet;

/// Line separating the sections of a serialized commit
pub const SECTION_DELIMITER: &str = "===";

pub const ROOT_MESSAGE: &str = "Initial Commit";
pub const ROOT_BRANCH: &str = "master";

const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
const HEADER_LINES: usize = 5;

static NO_TASKS: BTreeSet<String> = BTreeSet::new();

/// Everything a regular commit records
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    tree_oid: ObjectId,
    parent: ObjectId,
    timestamp: NaiveDateTime,
    author: String,
    branch: String,
    message: String,
    opened_tasks: BTreeSet<String>,
    closed_tasks: BTreeSet<String>,
    active_tasks: BTreeSet<String>,
}

impl Packable for CommitRecord {
    fn serialize(&self) -> Bytes {
        let mut lines = vec![
            self.tree_oid.to_string(),
            self.parent.to_string(),
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.author.clone(),
            self.branch.clone(),
        ];

        for section in [&self.opened_tasks, &self.closed_tasks, &self.active_tasks] {
            lines.push(SECTION_DELIMITER.to_string());
            lines.extend(section.iter().cloned());
        }

        lines.push(SECTION_DELIMITER.to_string());
        lines.push(self.message.clone());
        lines.push(SECTION_DELIMITER.to_string());

        Bytes::from(lines.join("\n"))
    }
}

/// Commit object
///
/// The root commit is a tagged variant instead of a sentinel-filled record, so
/// "no parent" and "empty tree" are expressed by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Root(ObjectId),
    Regular(ObjectId, Box<CommitRecord>),
}

impl Commit {
    /// The root commit every repository starts from
    pub fn root() -> Self {
        Commit::Root(ObjectId::hash_bytes(&[]))
    }

    pub fn from_record(record: CommitRecord) -> Self {
        let oid = ObjectId::hash_bytes(&record.serialize());
        Commit::Regular(oid, Box::new(record))
    }

    pub fn oid(&self) -> &ObjectId {
        match self {
            Commit::Root(oid) | Commit::Regular(oid, _) => oid,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Commit::Root(_))
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        match self {
            Commit::Root(_) => None,
            Commit::Regular(_, record) => Some(&record.parent),
        }
    }

    /// Tree snapshot id, `None` for the root's empty tree
    pub fn tree_oid(&self) -> Option<&ObjectId> {
        match self {
            Commit::Root(_) => None,
            Commit::Regular(_, record) => Some(&record.tree_oid),
        }
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Commit::Root(_) => None,
            Commit::Regular(_, record) => Some(record.timestamp),
        }
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp()
            .map(|timestamp| timestamp.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        match self {
            Commit::Root(_) => "",
            Commit::Regular(_, record) => &record.author,
        }
    }

    pub fn branch(&self) -> &str {
        match self {
            Commit::Root(_) => ROOT_BRANCH,
            Commit::Regular(_, record) => &record.branch,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Commit::Root(_) => ROOT_MESSAGE,
            Commit::Regular(_, record) => &record.message,
        }
    }

    pub fn opened_tasks(&self) -> &BTreeSet<String> {
        match self {
            Commit::Root(_) => &NO_TASKS,
            Commit::Regular(_, record) => &record.opened_tasks,
        }
    }

    pub fn closed_tasks(&self) -> &BTreeSet<String> {
        match self {
            Commit::Root(_) => &NO_TASKS,
            Commit::Regular(_, record) => &record.closed_tasks,
        }
    }

    /// Open tasks after this commit; the source of truth for the task ledger
    pub fn active_tasks(&self) -> &BTreeSet<String> {
        match self {
            Commit::Root(_) => &NO_TASKS,
            Commit::Regular(_, record) => &record.active_tasks,
        }
    }

    pub fn short_message(&self) -> &str {
        self.message().lines().next().unwrap_or_default()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        match self {
            Commit::Root(_) => Bytes::new(),
            Commit::Regular(_, record) => record.serialize(),
        }
    }
}

impl Object for Commit {
    fn object_id(&self) -> ObjectId {
        self.oid().clone()
    }
}

impl Unpackable for Commit {
    fn deserialize(oid: &ObjectId, data: Bytes) -> VcsResult<Self> {
        let text = std::str::from_utf8(&data)
            .map_err(|_| VcsError::corrupt(oid, "commit is not valid UTF-8"))?;

        if text.is_empty() {
            return Ok(Commit::Root(oid.clone()));
        }

        let mut sections = CommitSections::new(oid, text.split('\n'));

        let header = sections.header()?;

        let tree_oid = ObjectId::try_parse(header[0])
            .map_err(|_| VcsError::corrupt(oid, "malformed tree id"))?;
        let parent = ObjectId::try_parse(header[1])
            .map_err(|_| VcsError::corrupt(oid, "malformed parent id"))?;
        let timestamp = NaiveDateTime::parse_from_str(header[2], TIMESTAMP_FORMAT)
            .map_err(|_| VcsError::corrupt(oid, format!("malformed timestamp {}", header[2])))?;

        let opened_tasks = sections.next_task_section()?;
        let closed_tasks = sections.next_task_section()?;
        let active_tasks = sections.next_task_section()?;
        let message = sections.next_section()?.join("\n");

        let record = CommitRecord::new(
            tree_oid,
            parent,
            timestamp,
            header[3].to_string(),
            header[4].to_string(),
            message,
            opened_tasks,
            closed_tasks,
            active_tasks,
        );

        Ok(Commit::Regular(oid.clone(), Box::new(record)))
    }
}

/// Splits serialized commit text on delimiter lines
struct CommitSections<'c, I> {
    oid: &'c ObjectId,
    lines: I,
}

impl<'c, I: Iterator<Item = &'c str>> CommitSections<'c, I> {
    fn new(oid: &'c ObjectId, lines: I) -> Self {
        CommitSections { oid, lines }
    }

    /// Header fields are positional; a field may itself read `===`
    fn header(&mut self) -> VcsResult<Vec<&'c str>> {
        let header = self
            .lines
            .by_ref()
            .take(HEADER_LINES)
            .map(strip_carriage_return)
            .collect::<Vec<_>>();
        if header.len() != HEADER_LINES {
            return Err(VcsError::corrupt(
                self.oid,
                format!("expected {HEADER_LINES} header lines, found {}", header.len()),
            ));
        }

        match self.lines.next().map(strip_carriage_return) {
            Some(SECTION_DELIMITER) => Ok(header),
            _ => Err(VcsError::corrupt(self.oid, "header is not terminated")),
        }
    }

    fn next_section(&mut self) -> VcsResult<Vec<&'c str>> {
        let mut section = Vec::new();

        for line in self.lines.by_ref() {
            let line = strip_carriage_return(line);
            if line == SECTION_DELIMITER {
                return Ok(section);
            }
            section.push(line);
        }

        Err(VcsError::corrupt(self.oid, "unterminated commit section"))
    }

    fn next_task_section(&mut self) -> VcsResult<BTreeSet<String>> {
        Ok(self
            .next_section()?
            .into_iter()
            .filter(|task| !task.is_empty())
            .map(str::to_string)
            .collect())
    }
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// One commit rendered for `log` / `global-log`
///
/// The root commit renders as nothing.
#[derive(Debug, new)]
pub struct LogEntry<'c> {
    commit: &'c Commit,
    show_branch: bool,
}

impl std::fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.commit.is_root() {
            return Ok(());
        }

        writeln!(f, "{SECTION_DELIMITER}")?;
        writeln!(f, "commit {}", self.commit.oid())?;
        writeln!(f, "Date: {}", self.commit.readable_timestamp())?;
        writeln!(f, "Author: {}", self.commit.author())?;
        if self.show_branch {
            writeln!(f, "Branch: {}", self.commit.branch())?;
        }
        if !self.commit.opened_tasks().is_empty() {
            writeln!(f, "Opened Tasks:")?;
            for task in self.commit.opened_tasks() {
                writeln!(f, "{task}")?;
            }
        }
        if !self.commit.closed_tasks().is_empty() {
            writeln!(f, "Closed Tasks:")?;
            for task in self.commit.closed_tasks() {
                writeln!(f, "{task}")?;
            }
        }
        writeln!(f, "{}", self.commit.message())
    }
}
