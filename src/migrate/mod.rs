//! Migration and seed execution.
//!
//! The migration tool is an external collaborator: the wizard hands it a
//! force flag and treats the run as a black box that succeeds or fails.

use crate::error::{InstallerError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Seam for the wizard's migration phase.
pub trait MigrationRunner {
	/// Run schema migrations. `force` skips the tool's own confirmation
	/// prompts (required for non-interactive environments).
	fn migrate(&self, force: bool) -> Result<()>;

	/// Seed the database.
	fn seed(&self, force: bool) -> Result<()>;
}

/// Runs the configured shell commands from the application root.
pub struct CommandRunner {
	migrate_command: String,
	seed_command: String,
	workdir: PathBuf,
}

impl CommandRunner {
	pub fn new(
		migrate_command: impl Into<String>,
		seed_command: impl Into<String>,
		workdir: impl Into<PathBuf>,
	) -> Self {
		Self {
			migrate_command: migrate_command.into(),
			seed_command: seed_command.into(),
			workdir: workdir.into(),
		}
	}

	fn run(&self, command: &str, force: bool) -> Result<()> {
		let full = if force {
			format!("{command} --force")
		} else {
			command.to_string()
		};

		let status = Command::new("sh")
			.arg("-c")
			.arg(&full)
			.current_dir(&self.workdir)
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status()
			.map_err(|source| InstallerError::MigrationSpawn {
				command: full.clone(),
				source,
			})?;

		if !status.success() {
			return Err(InstallerError::MigrationFailed {
				command: full,
				exit_code: status.code().unwrap_or(-1),
			});
		}

		Ok(())
	}
}

impl MigrationRunner for CommandRunner {
	fn migrate(&self, force: bool) -> Result<()> {
		self.run(&self.migrate_command, force)
	}

	fn seed(&self, force: bool) -> Result<()> {
		self.run(&self.seed_command, force)
	}
}
