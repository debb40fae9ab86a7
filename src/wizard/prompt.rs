use crate::error::{InstallerError, Result};
use std::io::{self, Write};

/// Ask a free-form question; empty input takes the default.
pub fn ask(label: &str, default: &str) -> Result<String> {
	show(&format!("{label} [{default}]: "))?;
	let answer = read_answer()?;
	if answer.is_empty() {
		Ok(default.to_string())
	} else {
		Ok(answer)
	}
}

/// Ask the operator to pick one of `options`; accepts the option name or its
/// 1-based number, empty input takes the default.
pub fn choose(label: &str, options: &[&str], default: &str) -> Result<String> {
	loop {
		show(&format!("{label} ({}) [{default}]: ", options.join("/")))?;
		let answer = read_answer()?;

		if answer.is_empty() {
			return Ok(default.to_string());
		}

		if let Some(option) = options.iter().find(|o| **o == answer) {
			return Ok(option.to_string());
		}

		if let Ok(index) = answer.parse::<usize>()
			&& index >= 1
			&& index <= options.len()
		{
			return Ok(options[index - 1].to_string());
		}

		println!("  Please answer one of: {}", options.join(", "));
	}
}

/// Yes/no confirmation; empty or unrecognized input takes the default.
pub fn confirm(label: &str, default: bool) -> Result<bool> {
	let hint = if default { "Y/n" } else { "y/N" };
	show(&format!("{label} [{hint}]: "))?;

	let answer = read_answer()?.to_lowercase();
	match answer.as_str() {
		"y" | "yes" => Ok(true),
		"n" | "no" => Ok(false),
		_ => Ok(default),
	}
}

fn show(text: &str) -> Result<()> {
	print!("{text}");
	io::stdout()
		.flush()
		.map_err(|source| InstallerError::Prompt { source })
}

fn read_answer() -> Result<String> {
	let mut input = String::new();
	io::stdin()
		.read_line(&mut input)
		.map_err(|source| InstallerError::Prompt { source })?;
	Ok(input.trim().to_string())
}
