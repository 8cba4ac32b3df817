//! Branch names
//!
//! Branches are stored as flat files under `.vcs/Branches/`, so a name must
//! be a single path component.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str = r"^\.|\.\.|\.lock$|@\{|[\x00-\x20/\\\*:\?\[~\^\x7f]";

/// Branch every fresh repository starts on
pub const DEFAULT_BRANCH: &str = "master";
