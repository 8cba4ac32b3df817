//! Checkout operations and conflict handling
//!
//! Switching the working directory to another commit first checks that no
//! untracked work would be overwritten, then rewrites the tracked files and
//! the task ledger to match the target.

pub mod migration;
