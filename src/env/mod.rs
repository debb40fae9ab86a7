//! Env file management for the installer.
//!
//! This module handles:
//! - Merging key/value entries into line-oriented `KEY=VALUE` text
//! - Loading the env file with template fallback
//! - Persisting the merged result back to disk

pub mod merger;
pub mod store;

pub use merger::{merge_entries, quote_value};
pub use store::EnvFileStore;
