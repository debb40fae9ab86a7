//! Database connectivity and provisioning.
//!
//! This module handles:
//! - Server-level connection checks (no database selected)
//! - Schema-catalog existence queries per engine
//! - `CREATE DATABASE` when the target database is absent

pub mod probe;

pub use probe::{
	ConnectionParams, DatabaseProbe, Driver, ProvisionOutcome, SqlxProbe, validate_db_name,
};
