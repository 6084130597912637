//! Schema bootstrap.
//!
//! The service provisions its own schema on first run so an operator only
//! has to configure credentials:
//!
//! 1. Parse the target DSN. A DSN that does not parse is fatal.
//! 2. Ping the target over a one-off connection. If the ping succeeds, skip to step 5.
//! 3. Connect with the root DSN and run the create-database script.
//! 4. Open the target pool. Failure here is fatal on both paths.
//! 5. Run the create-table script against the target.
//!
//! Both scripts use create-if-not-exists semantics, so repeated startups are
//! idempotent.

use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Migrations;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid target DSN: {0}")]
    TargetDsn(#[source] sqlx::Error),
    #[error("invalid root DSN: {0}")]
    RootDsn(#[source] sqlx::Error),
    #[error("cannot connect to server root: {0}")]
    RootConnect(#[source] sqlx::Error),
    #[error("create database script failed: {0}")]
    CreateDatabase(#[source] sqlx::Error),
    #[error("cannot connect to target database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("create table script failed: {0}")]
    CreateTable(#[source] sqlx::Error),
}

/// Ensures the database and the `animal` table exist, returning a pool on
/// the target database.
pub async fn bootstrap(
    target_dsn: &str,
    root_dsn: &str,
    migrations: &Migrations,
) -> Result<MySqlPool, BootstrapError> {
    let target = MySqlConnectOptions::from_str(target_dsn).map_err(BootstrapError::TargetDsn)?;

    if let Err(e) = ping(&target).await {
        warn!("target database unreachable, provisioning it: {e}");
        create_database(root_dsn, &migrations.create_database).await?;
    }

    let pool = MySqlPoolOptions::new()
        .connect_with(target)
        .await
        .map_err(BootstrapError::Connect)?;
    info!("database connected");

    info!(script = %migrations.create_table.trim(), "running create table script");
    sqlx::raw_sql(&migrations.create_table)
        .execute(&pool)
        .await
        .map_err(BootstrapError::CreateTable)?;
    info!("animal table ready");

    Ok(pool)
}

/// One-off connection to the target, closed right after the round-trip.
async fn ping(target: &MySqlConnectOptions) -> Result<(), sqlx::Error> {
    let mut conn = MySqlConnection::connect_with(target).await?;
    conn.ping().await?;
    conn.close().await
}

async fn create_database(root_dsn: &str, script: &str) -> Result<(), BootstrapError> {
    let root = MySqlConnectOptions::from_str(root_dsn).map_err(BootstrapError::RootDsn)?;
    let root_pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(root)
        .await
        .map_err(BootstrapError::RootConnect)?;

    info!(script = %script.trim(), "running create database script");
    let result = sqlx::raw_sql(script).execute(&root_pool).await;
    root_pool.close().await;
    result.map_err(BootstrapError::CreateDatabase)?;
    Ok(())
}
