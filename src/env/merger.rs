use crate::error::{InstallerError, Result};
use regex::{NoExpand, Regex};

/// Merge an ordered set of `(key, value)` entries into env file text.
///
/// For each entry the document ends up with exactly one active `KEY=VALUE`
/// line (quoted per [`quote_value`]) and no commented `#KEY=` line. Keys that
/// are not declared anywhere in the document — not even as a comment — are
/// rejected with [`InstallerError::MissingKey`]; this function never appends
/// new lines.
///
/// Pure text transform: nothing touches disk until the caller persists the
/// returned string, so a failed entry leaves the file unchanged.
pub fn merge_entries(content: &str, entries: &[(String, String)]) -> Result<String> {
	let mut text = content.to_string();
	for (key, value) in entries {
		text = apply_entry(&text, key, value)?;
	}
	Ok(text)
}

/// Apply a single entry to the document text.
fn apply_entry(content: &str, key: &str, value: &str) -> Result<String> {
	let rendered = format!("{}={}", key, quote_value(value));
	let escaped_key = regex::escape(key);

	// Uncomment the line if it exists. The `=` right after the key keeps
	// APP_NAME from matching APP_NAME_SUFFIX.
	let commented = line_pattern(&format!(r"(?m)^#\s*{escaped_key}=.*$"));
	let text = commented.replace_all(content, NoExpand(&rendered));

	// Update the line if it exists. This also re-matches a line the pass
	// above just activated; the replacement text is identical, so the second
	// rewrite is a no-op rather than a bug.
	let active = line_pattern(&format!(r"(?m)^{escaped_key}=.*$"));
	let text = active.replace_all(&text, NoExpand(&rendered));

	// Verify the key ended up active somewhere in the document.
	let check = line_pattern(&format!(r"(?m)^{escaped_key}="));
	if !check.is_match(&text) {
		return Err(InstallerError::MissingKey {
			key: key.to_string(),
		});
	}

	Ok(text.into_owned())
}

fn line_pattern(pattern: &str) -> Regex {
	// The only dynamic part is a regex-escaped key, so compilation cannot fail.
	Regex::new(pattern).expect("escaped key forms a valid pattern")
}

/// Quote a value for an env file assignment.
///
/// Values containing whitespace, `#`, `'`, or `"` are wrapped in double
/// quotes with embedded backslashes and double quotes escaped; anything else
/// passes through untouched.
pub fn quote_value(value: &str) -> String {
	if needs_quoting(value) {
		let escaped = value.replace('\\', r"\\").replace('"', r#"\""#);
		format!("\"{escaped}\"")
	} else {
		value.to_string()
	}
}

fn needs_quoting(value: &str) -> bool {
	value
		.chars()
		.any(|c| c.is_whitespace() || matches!(c, '#' | '\'' | '"'))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn merge_one(content: &str, key: &str, value: &str) -> Result<String> {
		merge_entries(content, &[(key.to_string(), value.to_string())])
	}

	#[test]
	fn test_quote_plain_value_unchanged() {
		assert_eq!(quote_value("local"), "local");
		assert_eq!(quote_value("http://localhost"), "http://localhost");
		assert_eq!(quote_value(""), "");
	}

	#[test]
	fn test_quote_value_with_space() {
		assert_eq!(quote_value("My App"), "\"My App\"");
	}

	#[test]
	fn test_quote_value_with_special_characters() {
		assert_eq!(quote_value("pass#word"), "\"pass#word\"");
		assert_eq!(quote_value("it's"), "\"it's\"");
		assert_eq!(
			quote_value(r#"My "Awesome" App"#),
			r#""My \"Awesome\" App""#
		);
	}

	#[test]
	fn test_quote_value_escapes_backslashes() {
		assert_eq!(quote_value(r"a \ b"), r#""a \\ b""#);
	}

	#[test]
	fn test_update_existing_key() {
		let result = merge_one("APP_NAME=Laravel\nAPP_ENV=local\n", "APP_NAME", "TestApp").unwrap();
		assert_eq!(result, "APP_NAME=TestApp\nAPP_ENV=local\n");
	}

	#[test]
	fn test_update_with_spaces_is_quoted() {
		let result = merge_one("APP_NAME=Laravel\nAPP_ENV=local\n", "APP_NAME", "My App").unwrap();
		assert_eq!(result, "APP_NAME=\"My App\"\nAPP_ENV=local\n");
	}

	#[test]
	fn test_activates_commented_key() {
		let result =
			merge_one("#APP_NAME=Laravel\nAPP_ENV=local\n", "APP_NAME", "TestApp").unwrap();
		assert!(result.contains("APP_NAME=TestApp"));
		assert!(!result.contains("#APP_NAME"));
	}

	#[test]
	fn test_activates_commented_key_with_whitespace() {
		let result = merge_one("#  APP_DEBUG=true\n", "APP_DEBUG", "false").unwrap();
		assert_eq!(result, "APP_DEBUG=false\n");
	}

	#[test]
	fn test_missing_key_is_rejected() {
		let result = merge_one("APP_NAME=Laravel\n", "NOT_DECLARED", "x");
		match result.unwrap_err() {
			InstallerError::MissingKey { key } => assert_eq!(key, "NOT_DECLARED"),
			other => panic!("expected MissingKey, got {other:?}"),
		}
	}

	#[test]
	fn test_idempotent_merge() {
		let content = "APP_NAME=Laravel\nAPP_ENV=local\n#APP_DEBUG=true\n";
		let entries = vec![
			("APP_NAME".to_string(), "My App".to_string()),
			("APP_DEBUG".to_string(), "false".to_string()),
		];
		let once = merge_entries(content, &entries).unwrap();
		let twice = merge_entries(&once, &entries).unwrap();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_no_prefix_collision() {
		let content = "DB_HOST=localhost\nDB_HOST_READONLY=replica\n";
		let result = merge_one(content, "DB_HOST", "127.0.0.1").unwrap();
		assert_eq!(result, "DB_HOST=127.0.0.1\nDB_HOST_READONLY=replica\n");
	}

	#[test]
	fn test_preserves_unrelated_lines() {
		let content = "# app settings\nAPP_NAME=Laravel\n\nAPP_ENV=local\n";
		let result = merge_one(content, "APP_ENV", "production").unwrap();
		assert_eq!(result, "# app settings\nAPP_NAME=Laravel\n\nAPP_ENV=production\n");
	}

	#[test]
	fn test_value_with_dollar_sign_is_literal() {
		// Regex replacement syntax must not expand `$` in values.
		let result = merge_one("DB_PASSWORD=\n", "DB_PASSWORD", "pa$1word").unwrap();
		assert_eq!(result, "DB_PASSWORD=pa$1word\n");
	}

	#[test]
	fn test_entries_applied_in_order() {
		let content = "APP_NAME=Laravel\n";
		let entries = vec![
			("APP_NAME".to_string(), "First".to_string()),
			("APP_NAME".to_string(), "Second".to_string()),
		];
		let result = merge_entries(content, &entries).unwrap();
		assert_eq!(result, "APP_NAME=Second\n");
	}

	#[test]
	fn test_failure_mid_merge_reports_key() {
		let content = "APP_NAME=Laravel\n";
		let entries = vec![
			("APP_NAME".to_string(), "Ok".to_string()),
			("MISSING".to_string(), "x".to_string()),
		];
		assert!(matches!(
			merge_entries(content, &entries),
			Err(InstallerError::MissingKey { .. })
		));
	}
}
