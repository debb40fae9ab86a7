use crate::env::merger::merge_entries;
use crate::error::{InstallerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the env file, seeding it from a template on first use.
///
/// Both paths are supplied by the caller; nothing is resolved from ambient
/// state. Each operation re-reads the file, so concurrent installer runs are
/// not coordinated beyond the rename in [`EnvFileStore::save`].
#[derive(Debug, Clone)]
pub struct EnvFileStore {
	env_path: PathBuf,
	template_path: PathBuf,
}

impl EnvFileStore {
	pub fn new(env_path: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
		Self {
			env_path: env_path.into(),
			template_path: template_path.into(),
		}
	}

	pub fn env_path(&self) -> &Path {
		&self.env_path
	}

	/// Read the env file, copying the template into place first if the env
	/// file does not exist yet.
	pub fn load(&self) -> Result<String> {
		if !self.env_path.exists() {
			if !self.template_path.exists() {
				return Err(InstallerError::TemplateMissing {
					path: self.template_path.clone(),
				});
			}

			fs::copy(&self.template_path, &self.env_path).map_err(|source| {
				InstallerError::CopyFailed {
					template: self.template_path.clone(),
					target: self.env_path.clone(),
					source,
				}
			})?;
		}

		fs::read_to_string(&self.env_path).map_err(|source| InstallerError::ReadFailed {
			path: self.env_path.clone(),
			source,
		})
	}

	/// Overwrite the env file with `text` in full.
	///
	/// Writes a sibling temp file and renames it over the target so a crash
	/// mid-write never leaves a truncated env file behind.
	pub fn save(&self, text: &str) -> Result<()> {
		let tmp_path = self.temp_path();

		let write_err = |source| InstallerError::WriteFailed {
			path: self.env_path.clone(),
			source,
		};

		fs::write(&tmp_path, text).map_err(write_err)?;
		fs::rename(&tmp_path, &self.env_path).map_err(write_err)
	}

	/// Load, merge the entries, and persist the result.
	///
	/// A merge failure surfaces before `save`, leaving the on-disk file
	/// exactly as `load` found it.
	pub fn update(&self, entries: &[(String, String)]) -> Result<()> {
		let content = self.load()?;
		let merged = merge_entries(&content, entries)?;
		self.save(&merged)
	}

	fn temp_path(&self) -> PathBuf {
		let name = self
			.env_path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_else(|| ".env".to_string());
		self.env_path.with_file_name(format!("{name}.tmp"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn store_in(dir: &Path) -> EnvFileStore {
		EnvFileStore::new(dir.join(".env"), dir.join(".env.example"))
	}

	#[test]
	fn test_load_existing_file() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".env"), "APP_NAME=Laravel\n").unwrap();

		let store = store_in(dir.path());
		assert_eq!(store.load().unwrap(), "APP_NAME=Laravel\n");
	}

	#[test]
	fn test_load_copies_template_when_env_missing() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".env.example"), "APP_NAME=Laravel\nAPP_ENV=local\n").unwrap();

		let store = store_in(dir.path());
		let content = store.load().unwrap();

		assert_eq!(content, "APP_NAME=Laravel\nAPP_ENV=local\n");
		assert!(dir.path().join(".env").exists());
	}

	#[test]
	fn test_load_fails_without_template() {
		let dir = tempfile::tempdir().unwrap();

		let store = store_in(dir.path());
		assert!(matches!(
			store.load(),
			Err(InstallerError::TemplateMissing { .. })
		));
	}

	#[test]
	fn test_save_overwrites_in_full() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".env"), "OLD=1\nSTALE=2\n").unwrap();

		let store = store_in(dir.path());
		store.save("NEW=1\n").unwrap();

		assert_eq!(fs::read_to_string(dir.path().join(".env")).unwrap(), "NEW=1\n");
		assert!(!dir.path().join(".env.tmp").exists());
	}

	#[test]
	fn test_update_merges_and_persists() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".env"), "APP_NAME=Laravel\nAPP_ENV=local\n").unwrap();

		let store = store_in(dir.path());
		store
			.update(&[("APP_NAME".to_string(), "My App".to_string())])
			.unwrap();

		let content = fs::read_to_string(dir.path().join(".env")).unwrap();
		assert_eq!(content, "APP_NAME=\"My App\"\nAPP_ENV=local\n");
	}

	#[test]
	fn test_update_missing_key_leaves_file_untouched() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".env"), "APP_NAME=Laravel\n").unwrap();

		let store = store_in(dir.path());
		let result = store.update(&[("UNKNOWN".to_string(), "x".to_string())]);

		assert!(matches!(result, Err(InstallerError::MissingKey { .. })));
		assert_eq!(
			fs::read_to_string(dir.path().join(".env")).unwrap(),
			"APP_NAME=Laravel\n"
		);
	}

	#[test]
	fn test_template_fallback_then_update() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".env.example"), "APP_NAME=Laravel\n").unwrap();

		let store = store_in(dir.path());
		store
			.update(&[("APP_NAME".to_string(), "TestApp".to_string())])
			.unwrap();

		let content = fs::read_to_string(dir.path().join(".env")).unwrap();
		assert_eq!(content, "APP_NAME=TestApp\n");
		// Template itself stays pristine.
		assert_eq!(
			fs::read_to_string(dir.path().join(".env.example")).unwrap(),
			"APP_NAME=Laravel\n"
		);
	}
}
