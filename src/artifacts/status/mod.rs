//! Working tree status inspection
//!
//! Reconciles the working directory, the staging index and the head commit's
//! tree into one classification per path.
//!
//! ## Components
//!
//! - `file_change`: How a single path differs
//! - `inspector`: Classification rules
//! - `status_info`: Report aggregation and display

pub mod file_change;
pub mod inspector;
pub mod status_info;
