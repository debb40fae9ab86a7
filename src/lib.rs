//! envwizard - interactive installer for web applications.
//!
//! This library provides the core functionality for envwizard, including:
//! - Merging key/value entries into line-oriented `.env` files
//! - Env file storage with template fallback and atomic writes
//! - Database provisioning (existence check + `CREATE DATABASE`)
//! - Delegation to external migration/seed commands
//!
//! # Example
//!
//! ```no_run
//! use envwizard_cli::env::{EnvFileStore, merge_entries};
//!
//! let store = EnvFileStore::new(".env", ".env.example");
//! let content = store.load().unwrap();
//!
//! let entries = vec![("APP_NAME".to_string(), "My App".to_string())];
//! let merged = merge_entries(&content, &entries).unwrap();
//! store.save(&merged).unwrap();
//! ```

pub mod db;
pub mod env;
pub mod error;
pub mod migrate;
pub mod setup;
pub mod wizard;

pub use error::{InstallerError, Result};
