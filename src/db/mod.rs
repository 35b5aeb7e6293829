//! Query functions per table over an [`AnyPool`], so the same code runs on the
//! embedded SQLite file and on Postgres. Queries stick to `$N` placeholders
//! and column types both drivers decode through `Any` (integers, floats,
//! text); timestamps and JSON are stored as text.

pub mod applications;
pub mod jobs;
pub mod resumes;
pub mod users;

use sqlx::any::AnyPoolOptions;
use sqlx::migrate::MigrateError;
use sqlx::AnyPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, String> {
        let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or_default();
        match scheme {
            "sqlite" => Ok(Backend::Sqlite),
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            _ => Err(format!(
                "Unsupported DATABASE_URL scheme '{scheme}': expected sqlite:// or postgres://"
            )),
        }
    }
}

/// Opens a pool for `url`, choosing the driver from its scheme.
pub async fn connect(url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Applies the schema for `backend`.
pub async fn migrate(pool: &AnyPool, backend: Backend) -> Result<(), MigrateError> {
    match backend {
        Backend::Sqlite => sqlx::migrate!("./migrations/sqlite").run(pool).await,
        Backend::Postgres => sqlx::migrate!("./migrations/postgres").run(pool).await,
    }
}
