use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use envwizard_cli::db::SqlxProbe;
use envwizard_cli::env::EnvFileStore;
use envwizard_cli::migrate::CommandRunner;
use envwizard_cli::setup::load_defaults;
use envwizard_cli::wizard::InstallWizard;

#[derive(Parser)]
#[command(name = "envwizard")]
#[command(
	author,
	version,
	about = "Interactive installer wizard: configures .env, provisions the database, runs migrations"
)]
struct Cli {
	/// Application root directory
	#[arg(long, default_value = ".")]
	dir: PathBuf,

	/// Env file to update (defaults to .env under --dir)
	#[arg(long, value_name = "PATH")]
	env_file: Option<PathBuf>,

	/// Template used to seed the env file (defaults to .env.example under --dir)
	#[arg(long, value_name = "PATH")]
	template: Option<PathBuf>,

	/// Installer defaults file (defaults to installer.toml under --dir)
	#[arg(long, value_name = "PATH")]
	defaults: Option<PathBuf>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("Installation failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let env_file = cli.env_file.unwrap_or_else(|| cli.dir.join(".env"));
	let template = cli.template.unwrap_or_else(|| cli.dir.join(".env.example"));
	let defaults_path = cli.defaults.unwrap_or_else(|| cli.dir.join("installer.toml"));

	let defaults = load_defaults(&defaults_path).context("Failed to load installer defaults")?;

	let runner = CommandRunner::new(
		defaults.migrate.command.clone(),
		defaults.migrate.seed_command.clone(),
		cli.dir.clone(),
	);

	let wizard = InstallWizard::new(
		defaults,
		EnvFileStore::new(env_file, template),
		Box::new(SqlxProbe),
		Box::new(runner),
	);

	wizard.run()?;
	Ok(ExitCode::SUCCESS)
}
