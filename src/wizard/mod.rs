//! The interactive install wizard.
//!
//! Sequences the three install phases — environment configuration, database
//! configuration and provisioning, migrations/seeding — and stops at the
//! first failure. This is the only place that prompts the operator or
//! decides default values.

pub mod prompt;

use crate::db::{ConnectionParams, DatabaseProbe, Driver, ProvisionOutcome};
use crate::env::EnvFileStore;
use crate::error::Result;
use crate::migrate::MigrationRunner;
use crate::setup::Defaults;
use indicatif::{ProgressBar, ProgressStyle};

const LOGO: &str = r#"
   ___           _        _ _
  |_ _|_ __  ___| |_ __ _| | | ___ _ __
   | || '_ \/ __| __/ _` | | |/ _ \ '__|
   | || | | \__ \ || (_| | | |  __/ |
  |___|_| |_|___/\__\__,_|_|_|\___|_|
"#;

const SUCCESS_ART: &str = r#"
   _____ _                 _      __   __          _
  |_   _| |__   __ _ _ __ | | __  \ \ / /__  _   _| |
    | | | '_ \ / _` | '_ \| |/ /   \ V / _ \| | | | |
    | | | | | | (_| | | | |   <     | | (_) | |_| |_|
    |_| |_| |_|\__,_|_| |_|_|\_\    |_|\___/ \__,_(_)
"#;

pub struct InstallWizard {
	defaults: Defaults,
	store: EnvFileStore,
	probe: Box<dyn DatabaseProbe>,
	migrator: Box<dyn MigrationRunner>,
}

impl InstallWizard {
	pub fn new(
		defaults: Defaults,
		store: EnvFileStore,
		probe: Box<dyn DatabaseProbe>,
		migrator: Box<dyn MigrationRunner>,
	) -> Self {
		Self {
			defaults,
			store,
			probe,
			migrator,
		}
	}

	/// Drive the full install. The first error from any phase aborts the run.
	pub fn run(&self) -> Result<()> {
		self.display_welcome();

		self.configure_environment()?;
		self.configure_database()?;
		self.run_migrations()?;

		self.display_success();
		Ok(())
	}

	fn display_welcome(&self) {
		println!("{LOGO}");
		println!("✨ Welcome to the application installer!");
		println!("This wizard will guide you through the installation process.\n");
	}

	fn configure_environment(&self) -> Result<()> {
		println!("📝 Step 1: Environment Configuration");
		println!("----------------------------------------");

		let bar = step_bar(3);

		let app_name = prompt::ask("  🏷️  Application Name", &self.defaults.app.name)?;
		bar.inc(1);

		let app_url = prompt::ask("  🌐 Application URL", &self.defaults.app.url)?;
		bar.inc(1);

		let app_env = prompt::choose(
			"  🔧 Application Environment",
			&["local", "production"],
			&self.defaults.app.env,
		)?;
		bar.inc(1);
		bar.finish();

		self.store.update(&[
			("APP_NAME".to_string(), app_name),
			("APP_URL".to_string(), app_url),
			("APP_ENV".to_string(), app_env),
		])?;

		println!("✅ Environment configuration completed successfully!\n");
		Ok(())
	}

	fn configure_database(&self) -> Result<()> {
		println!("💾 Step 2: Database Configuration");
		println!("----------------------------------------");

		let bar = step_bar(6);

		let connection = prompt::choose(
			"  🔌 Database Connection",
			&["mysql", "pgsql", "sqlite"],
			&self.defaults.database.connection,
		)?;
		let driver = Driver::parse(&connection)?;
		bar.inc(1);

		let host = prompt::ask("  🖥️  Database Host", &self.defaults.database.host)?;
		bar.inc(1);

		let port = ask_port("  🔌 Database Port", self.defaults.database.port)?;
		bar.inc(1);

		let database = prompt::ask("  📁 Database Name", &self.defaults.database.database)?;
		bar.inc(1);

		let username = prompt::ask("  👤 Database User", &self.defaults.database.username)?;
		bar.inc(1);

		let password = prompt::ask("  🔑 Database Password", &self.defaults.database.password)?;
		bar.inc(1);
		bar.finish();

		self.store.update(&[
			("DB_CONNECTION".to_string(), connection),
			("DB_HOST".to_string(), host.clone()),
			("DB_PORT".to_string(), port.to_string()),
			("DB_DATABASE".to_string(), database.clone()),
			("DB_USERNAME".to_string(), username.clone()),
			("DB_PASSWORD".to_string(), password.clone()),
		])?;

		let params = ConnectionParams {
			driver,
			host,
			port,
			database,
			username,
			password,
		};

		match self.probe.ensure_database(&params)? {
			ProvisionOutcome::Created => {
				println!("Database '{}' created successfully.", params.database);
			}
			ProvisionOutcome::AlreadyExists => {
				println!("Database '{}' already exists.", params.database);
			}
			ProvisionOutcome::Skipped => {}
		}

		println!("✅ Database configuration completed successfully!\n");
		Ok(())
	}

	fn run_migrations(&self) -> Result<()> {
		println!("🔄 Step 3: Running Migrations");
		println!("----------------------------------------");

		self.migrator.migrate(true)?;

		if prompt::confirm("  🌱 Do you want to seed the database?", false)? {
			self.migrator.seed(true)?;
		}

		println!("✅ Migration completed successfully!\n");
		Ok(())
	}

	fn display_success(&self) {
		println!("{SUCCESS_ART}");
		println!("🎉 Installation completed successfully!");
		println!("Your application is configured in {}", self.store.env_path().display());
	}
}

fn step_bar(len: u64) -> ProgressBar {
	let style = ProgressStyle::with_template("   {pos}/{len} [{bar:40}] {percent:>3}%")
		.expect("static progress template");
	ProgressBar::new(len).with_style(style)
}

fn ask_port(label: &str, default: u16) -> Result<u16> {
	loop {
		let answer = prompt::ask(label, &default.to_string())?;
		match answer.parse::<u16>() {
			Ok(port) => return Ok(port),
			Err(_) => println!("  Please enter a valid port number."),
		}
	}
}
