//! A local, single-user version-control engine
//!
//! Content-addressed object store, flat snapshot trees, a single-parent
//! commit graph with per-commit task tracking, a staging index, and a
//! checkout/reset engine that refuses to overwrite untracked work.
//!
//! - `areas`: On-disk areas and the [`Repository`] session
//! - `artifacts`: Value types and algorithms
//! - `commands`: User-facing operations, one file per command

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::repository::Repository;
pub use artifacts::core::config::Config;
pub use artifacts::core::error::{ErrorKind, VcsError, VcsResult};
