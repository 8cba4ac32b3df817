//! Task names
//!
//! Every open task is a marker file under `.vcs/Tasks/`, and commits list
//! tasks one per line between section delimiters. A task name therefore has
//! to be a single path component, free of whitespace, and must not collide
//! with the commit section delimiter.

pub mod task_name;

pub const INVALID_TASK_NAME_REGEX: &str = r"^\.\.?$|^===$|[\x00-\x20/\\\x7f]";
