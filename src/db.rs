use anyhow::Context;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    Connection, MySqlPool,
};

use crate::config::DatabaseConfig;

pub fn connect_options(config: &DatabaseConfig) -> anyhow::Result<MySqlConnectOptions> {
    let (host, port) = config.host_and_port()?;
    let mut options = MySqlConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&config.user)
        .password(&config.password);
    if !config.name.is_empty() {
        options = options.database(&config.name);
    }
    Ok(options)
}

/// Opens the pool and checks that the server answers before anything is served.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect_with(connect_options(config)?)
        .await
        .context("connect to database")?;

    pool.acquire()
        .await
        .context("acquire database connection")?
        .ping()
        .await
        .context("ping database")?;

    tracing::info!(host = %config.host, database = %config.name, "connected to MySQL");
    Ok(pool)
}

pub async fn run_migrations(pool: &MySqlPool) {
    if let Err(e) = sqlx::migrate!("./migrations").run(pool).await {
        tracing::warn!(error = %e, "migrations failed; assuming schema is already in place");
    }
}
