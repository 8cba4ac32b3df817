//! On-disk repository areas
//!
//! - `database`: Object store for blobs, trees and commits
//! - `index`: Staging area recording changes for the next commit
//! - `refs`: Branch pointers, HEAD and the global commit journal
//! - `tasks`: Open-task markers mirroring the checked-out commit
//! - `workspace`: Working directory file system operations
//! - `repository`: The session tying the areas together

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod tasks;
pub mod workspace;
