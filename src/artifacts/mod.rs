//! Value types and algorithms
//!
//! - `branch`: Branch name validation
//! - `checkout`: Checkout migration and conflict detection
//! - `core`: Errors and configuration
//! - `index`: Staging index entries
//! - `objects`: Stored object types (blob, tree, commit)
//! - `status`: Working tree status inspection
//! - `tasks`: Task name validation

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod objects;
pub mod status;
pub mod tasks;
