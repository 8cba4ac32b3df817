//! Command implementations
//!
//! Only porcelain commands are exposed; the object store, refs and index are
//! reached through them.

pub mod porcelain;
