use serde::Deserialize;

/// Prompt defaults from an `installer.toml` file.
///
/// Every section and field is optional; missing pieces fall back to the
/// built-in Laravel-flavored values below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Defaults {
	pub app: AppDefaults,
	pub database: DatabaseDefaults,
	pub migrate: MigrateDefaults,
}

/// Defaults for the application settings prompts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AppDefaults {
	pub name: String,
	pub url: String,
	pub env: String,
}

impl Default for AppDefaults {
	fn default() -> Self {
		Self {
			name: "Laravel".to_string(),
			url: "http://localhost".to_string(),
			env: "local".to_string(),
		}
	}
}

/// Defaults for the database connection prompts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DatabaseDefaults {
	pub connection: String,
	pub host: String,
	pub port: u16,
	pub database: String,
	pub username: String,
	pub password: String,
}

impl Default for DatabaseDefaults {
	fn default() -> Self {
		Self {
			connection: "mysql".to_string(),
			host: "127.0.0.1".to_string(),
			port: 3306,
			database: "laravel".to_string(),
			username: "root".to_string(),
			password: String::new(),
		}
	}
}

/// Commands the wizard delegates migration and seeding to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MigrateDefaults {
	pub command: String,
	pub seed_command: String,
}

impl Default for MigrateDefaults {
	fn default() -> Self {
		Self {
			command: "php artisan migrate".to_string(),
			seed_command: "php artisan db:seed".to_string(),
		}
	}
}
