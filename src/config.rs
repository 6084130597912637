//! Environment-based configuration and migration script loading.
//!
//! Environment variables used:
//! - `DATABASE_URL`: DSN of the target database (required)
//! - `DATABASE_ROOT_URL`: DSN of the server with no database selected (required)
//! - `BIND_ADDR`: listener address (default `0.0.0.0:8080`)
//! - `MIGRATION_DIR`: directory holding the SQL scripts (default `migration`)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MIGRATION_DIR: &str = "migration";
pub const CREATE_DATABASE_SCRIPT: &str = "CreatingDatabase.sql";
pub const CREATE_TABLE_SCRIPT: &str = "CreatingTable.sql";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing env var: {0}")]
    MissingEnvVar(&'static str),
    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("cannot read migration script {path}: {source}")]
    MigrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Service configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_root_url: String,
    pub bind_addr: SocketAddr,
    pub migration_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// A `.env` file in the working directory, if present, is loaded first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingEnvVar(name))
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name: "BIND_ADDR", value: bind_raw.clone() })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_root_url: required("DATABASE_ROOT_URL")?,
            bind_addr,
            migration_dir: lookup("MIGRATION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MIGRATION_DIR)),
        })
    }
}

/// The two SQL scripts run by the schema bootstrap.
#[derive(Debug, Clone)]
pub struct Migrations {
    pub create_database: String,
    pub create_table: String,
}

impl Migrations {
    /// Loads `CreatingDatabase.sql` and `CreatingTable.sql` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            create_database: read_script(&dir.join(CREATE_DATABASE_SCRIPT))?,
            create_table: read_script(&dir.join(CREATE_TABLE_SCRIPT))?,
        })
    }
}

fn read_script(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map_err(|source| ConfigError::MigrationRead { path: path.to_owned(), source })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "mysql://root:pw@localhost:3306/anekazoo"),
            ("DATABASE_ROOT_URL", "mysql://root:pw@localhost:3306/"),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.migration_dir, PathBuf::from("migration"));
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[("DATABASE_ROOT_URL", "mysql://localhost/")]))
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::MissingEnvVar("DATABASE_URL")));
    }

    #[test]
    fn malformed_bind_addr_is_an_error() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "mysql://localhost/anekazoo"),
            ("DATABASE_ROOT_URL", "mysql://localhost/"),
            ("BIND_ADDR", "not-an-addr"),
        ]))
        .expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidValue { name: "BIND_ADDR", .. }));
    }

    #[test]
    fn loads_repository_migrations() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_MIGRATION_DIR);
        let migrations = Migrations::load(&dir).expect("scripts");
        assert!(migrations.create_database.contains("CREATE DATABASE IF NOT EXISTS"));
        assert!(migrations.create_table.contains("CREATE TABLE IF NOT EXISTS"));
    }

    #[test]
    fn missing_script_is_an_error() {
        let err = Migrations::load(Path::new("does/not/exist")).expect_err("must fail");
        assert!(matches!(err, ConfigError::MigrationRead { .. }));
    }
}
