use std::path::PathBuf;

/// Library-level structured errors for the installer.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum InstallerError {
	#[error("Key '{key}' is not declared in the env file; unknown keys are never appended")]
	MissingKey { key: String },

	#[error("Template file not found: {path}")]
	TemplateMissing { path: PathBuf },

	#[error("Failed to copy template {template} to {target}")]
	CopyFailed {
		template: PathBuf,
		target: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read file: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write env file: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse defaults file: {path}")]
	DefaultsParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Unknown database driver: {driver}")]
	UnknownDriver { driver: String },

	#[error("Invalid database name: {name}")]
	InvalidDatabaseName { name: String },

	#[error("Failed to connect to the database or create the database")]
	DatabaseProvisioning {
		#[source]
		source: sqlx::Error,
	},

	#[error("Migration command failed: {command} (exit code: {exit_code})")]
	MigrationFailed { command: String, exit_code: i32 },

	#[error("Failed to run migration command: {command}")]
	MigrationSpawn {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read operator input")]
	Prompt {
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using InstallerError.
pub type Result<T> = std::result::Result<T, InstallerError>;
