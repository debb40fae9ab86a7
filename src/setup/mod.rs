//! Installer defaults loading and parsing.
//!
//! Prompt defaults (application settings, database connection parameters,
//! migrate/seed commands) come from an optional `installer.toml` in the
//! application root. A missing file means built-in defaults; a malformed
//! file is a hard error.

pub mod parser;
pub mod types;

pub use parser::{load_defaults, parse_defaults_str};
pub use types::{AppDefaults, DatabaseDefaults, Defaults, MigrateDefaults};
