use crate::error::{InstallerError, Result};
use crate::setup::types::Defaults;
use std::path::Path;

/// Load installer defaults from the given path.
///
/// A missing file is not an error; the built-in defaults apply.
pub fn load_defaults(path: &Path) -> Result<Defaults> {
	if !path.exists() {
		return Ok(Defaults::default());
	}

	let content = std::fs::read_to_string(path).map_err(|source| InstallerError::ReadFailed {
		path: path.to_path_buf(),
		source,
	})?;

	parse_defaults_str(&content, path)
}

/// Parse defaults from a string (useful for testing).
pub fn parse_defaults_str(content: &str, path: &Path) -> Result<Defaults> {
	toml::from_str(content).map_err(|source| InstallerError::DefaultsParse {
		path: path.to_path_buf(),
		source,
	})
}
