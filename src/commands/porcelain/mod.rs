//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block operating on the session.
//!
//! ## Commands
//!
//! - `init`: Create a new repository
//! - `add`: Stage files for commit
//! - `remove`: Unstage files or stage removals
//! - `commit`: Record staged changes and task transitions
//! - `log`: Show the current lineage or every commit ever made
//! - `status`: Classify working tree changes
//! - `branch`: Create, list or delete branches
//! - `checkout`: Switch branches or restore files
//! - `reset`: Move the current branch or discard working-tree edits

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod remove;
pub mod reset;
pub mod status;
