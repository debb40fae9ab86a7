use crate::error::{InstallerError, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};

/// Database engine selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
	Mysql,
	Pgsql,
	Sqlite,
}

impl Driver {
	pub fn parse(name: &str) -> Result<Self> {
		match name {
			"mysql" => Ok(Driver::Mysql),
			"pgsql" => Ok(Driver::Pgsql),
			"sqlite" => Ok(Driver::Sqlite),
			other => Err(InstallerError::UnknownDriver {
				driver: other.to_string(),
			}),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Driver::Mysql => "mysql",
			Driver::Pgsql => "pgsql",
			Driver::Sqlite => "sqlite",
		}
	}
}

/// Raw connection parameters for the provisioning check.
///
/// Transient: used for the single server round trip and never persisted
/// beyond the env file entries the wizard already wrote.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
	pub driver: Driver,
	pub host: String,
	pub port: u16,
	pub database: String,
	pub username: String,
	pub password: String,
}

/// What the provisioning check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
	/// The database already existed on the server.
	AlreadyExists,
	/// The database was created.
	Created,
	/// File-based engine; there is nothing to provision.
	Skipped,
}

/// Seam for the wizard's database phase.
///
/// Production code uses [`SqlxProbe`]; tests substitute a stub so failure
/// paths are deterministic without a real server.
pub trait DatabaseProbe {
	/// Connect at the server level and make sure the named database exists,
	/// creating it if absent. One blocking round trip, no retry.
	fn ensure_database(&self, params: &ConnectionParams) -> Result<ProvisionOutcome>;
}

/// Production probe backed by sqlx.
///
/// Owns a current-thread tokio runtime per call so the surrounding wizard
/// stays synchronous and blocking.
pub struct SqlxProbe;

impl DatabaseProbe for SqlxProbe {
	fn ensure_database(&self, params: &ConnectionParams) -> Result<ProvisionOutcome> {
		if params.driver == Driver::Sqlite {
			return Ok(ProvisionOutcome::Skipped);
		}

		validate_db_name(&params.database)?;

		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()
			.map_err(|source| InstallerError::DatabaseProvisioning {
				source: sqlx::Error::Io(source),
			})?;

		let outcome = runtime.block_on(async {
			match params.driver {
				Driver::Mysql => ensure_mysql(params).await,
				Driver::Pgsql => ensure_pgsql(params).await,
				// Handled before the runtime is built.
				Driver::Sqlite => Ok(ProvisionOutcome::Skipped),
			}
		});

		outcome.map_err(|source| InstallerError::DatabaseProvisioning { source })
	}
}

async fn ensure_mysql(params: &ConnectionParams) -> std::result::Result<ProvisionOutcome, sqlx::Error> {
	let options = MySqlConnectOptions::new()
		.host(&params.host)
		.port(params.port)
		.username(&params.username)
		.password(&params.password);

	let mut conn: MySqlConnection = options.connect().await?;

	let exists = sqlx::query(MYSQL_SCHEMA_EXISTS)
		.bind(&params.database)
		.fetch_optional(&mut conn)
		.await?
		.is_some();

	let outcome = if exists {
		ProvisionOutcome::AlreadyExists
	} else {
		sqlx::query(&mysql_create_stmt(&params.database))
			.execute(&mut conn)
			.await?;
		ProvisionOutcome::Created
	};

	conn.close().await?;
	Ok(outcome)
}

async fn ensure_pgsql(params: &ConnectionParams) -> std::result::Result<ProvisionOutcome, sqlx::Error> {
	// Postgres has no "no database selected" mode; the maintenance database
	// stands in for a server-level connection.
	let options = PgConnectOptions::new()
		.host(&params.host)
		.port(params.port)
		.username(&params.username)
		.password(&params.password)
		.database("postgres");

	let mut conn: PgConnection = options.connect().await?;

	let exists = sqlx::query(PG_DATABASE_EXISTS)
		.bind(&params.database)
		.fetch_optional(&mut conn)
		.await?
		.is_some();

	let outcome = if exists {
		ProvisionOutcome::AlreadyExists
	} else {
		sqlx::query(&pg_create_stmt(&params.database))
			.execute(&mut conn)
			.await?;
		ProvisionOutcome::Created
	};

	conn.close().await?;
	Ok(outcome)
}

const MYSQL_SCHEMA_EXISTS: &str =
	"SELECT SCHEMA_NAME FROM INFORMATION_SCHEMA.SCHEMATA WHERE SCHEMA_NAME = ?";

const PG_DATABASE_EXISTS: &str = "SELECT 1 FROM pg_database WHERE datname = $1";

/// Validate a database name before it reaches a `CREATE DATABASE` statement.
///
/// Identifiers cannot be bound as parameters, so only conservative names
/// (letters, digits, underscore; 1-64 chars) are allowed through.
pub fn validate_db_name(name: &str) -> Result<()> {
	let valid = !name.is_empty()
		&& name.len() <= 64
		&& !name.starts_with(|c: char| c.is_ascii_digit())
		&& name
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '_');

	if valid {
		Ok(())
	} else {
		Err(InstallerError::InvalidDatabaseName {
			name: name.to_string(),
		})
	}
}

fn mysql_create_stmt(name: &str) -> String {
	format!("CREATE DATABASE `{name}`")
}

fn pg_create_stmt(name: &str) -> String {
	format!("CREATE DATABASE \"{name}\"")
}
