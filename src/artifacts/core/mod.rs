//! Core utilities and shared types
//!
//! - `config`: environment-driven settings (author, fixed commit date)
//! - `error`: the typed error enum shared by every area and command

pub mod config;
pub mod error;
