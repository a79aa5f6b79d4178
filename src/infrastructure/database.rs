use std::path::Path;
use std::time::Duration;

use anyhow::{Context, anyhow};
use sqlx::migrate::{Migrate, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::config::DatabaseConfig;

/// Migrations embedded from `./migrations` at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the connection pool, giving up after `connect_timeout_seconds`
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
  let pool = tokio::time::timeout(
    Duration::from_secs(config.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.max_connections)
      .min_connections(config.min_connections)
      .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
      .max_lifetime(Duration::from_secs(config.max_lifetime_seconds))
      .connect(&config.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      timeout_seconds = config.connect_timeout_seconds,
      "Database connection timed out. Is PostgreSQL running?"
    );
    anyhow!(
      "database connection timed out after {} seconds",
      config.connect_timeout_seconds
    )
  })?
  .context("failed to connect to database")?;

  tracing::info!(
    max_connections = config.max_connections,
    "Database connection pool created"
  );

  Ok(pool)
}

/// Loads migrations from a directory at runtime instead of the embedded set
pub async fn load_migrator(path: &Path) -> anyhow::Result<Migrator> {
  Migrator::new(path)
    .await
    .with_context(|| format!("failed to load migrations from {}", path.display()))
}

/// Applies every pending migration
pub async fn run_migrations(pool: &PgPool, migrator: &Migrator) -> anyhow::Result<()> {
  tracing::info!("Running database migrations");
  migrator
    .run(pool)
    .await
    .context("failed to run database migrations")?;
  tracing::info!("Database migrations completed");
  Ok(())
}

/// Reverts the most recently applied migration
///
/// Returns the reverted version, or `None` when nothing was applied.
pub async fn rollback_last_migration(
  pool: &PgPool,
  migrator: &Migrator,
) -> anyhow::Result<Option<i64>> {
  let mut applied = {
    let mut conn = pool.acquire().await.context("failed to acquire connection")?;
    conn.ensure_migrations_table().await?;
    conn.list_applied_migrations().await?
  };
  applied.sort_by_key(|m| m.version);

  let Some(last) = applied.pop() else {
    tracing::info!("No applied migrations to roll back");
    return Ok(None);
  };
  let target = applied.last().map(|m| m.version).unwrap_or(0);

  migrator
    .undo(pool, target)
    .await
    .with_context(|| format!("failed to roll back migration {}", last.version))?;

  tracing::info!(version = last.version, "Rolled back migration");
  Ok(Some(last.version))
}

/// Records `version` as the latest cleanly applied migration without running
/// any SQL
///
/// Clears the dirty flag a failed migration leaves behind and forgets every
/// record above `version`, so the next run starts after it.
pub async fn force_migration_version(
  pool: &PgPool,
  migrator: &Migrator,
  version: i64,
) -> anyhow::Result<()> {
  let migration = migrator
    .iter()
    .find(|m| m.version == version && m.migration_type.is_up_migration())
    .ok_or_else(|| anyhow!("unknown migration version {}", version))?;

  {
    let mut conn = pool.acquire().await.context("failed to acquire connection")?;
    conn.ensure_migrations_table().await?;
  }

  let mut tx = pool.begin().await?;

  sqlx::query("DELETE FROM _sqlx_migrations WHERE version > $1")
    .bind(version)
    .execute(&mut *tx)
    .await?;

  sqlx::query(
    r#"
    INSERT INTO _sqlx_migrations (version, description, success, checksum, execution_time)
    VALUES ($1, $2, TRUE, $3, 0)
    ON CONFLICT (version) DO UPDATE
    SET success = TRUE, checksum = EXCLUDED.checksum, description = EXCLUDED.description
    "#,
  )
  .bind(migration.version)
  .bind(&*migration.description)
  .bind(&*migration.checksum)
  .execute(&mut *tx)
  .await?;

  tx.commit().await?;

  tracing::warn!(version, "Forced migration version");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::postgres::user_repository::tests::setup_test_db;

  #[test]
  fn test_migrations_are_reversible() {
    assert!(MIGRATOR.iter().count() >= 2);
    assert!(
      MIGRATOR
        .iter()
        .all(|m| m.migration_type.is_reversible())
    );
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_rollback_last_migration() {
    let (pool, _container) = setup_test_db().await;

    let reverted = rollback_last_migration(&pool, &MIGRATOR).await.unwrap();
    assert!(reverted.is_some());

    let news_table: Option<String> =
      sqlx::query_scalar("SELECT to_regclass('public.news')::text")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(news_table.is_none());

    run_migrations(&pool, &MIGRATOR).await.unwrap();
  }

  #[tokio::test]
  async fn test_load_migrator_from_directory() {
    let migrator = load_migrator(Path::new("./migrations")).await.unwrap();

    assert_eq!(migrator.iter().count(), MIGRATOR.iter().count());
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_force_clears_failed_migration() {
    let (pool, _container) = setup_test_db().await;
    let versions: Vec<i64> = MIGRATOR
      .iter()
      .filter(|m| m.migration_type.is_up_migration())
      .map(|m| m.version)
      .collect();
    let (first, last) = (versions[0], versions[versions.len() - 1]);

    sqlx::query("UPDATE _sqlx_migrations SET success = FALSE WHERE version = $1")
      .bind(last)
      .execute(&pool)
      .await
      .unwrap();
    assert!(run_migrations(&pool, &MIGRATOR).await.is_err());

    force_migration_version(&pool, &MIGRATOR, last).await.unwrap();
    run_migrations(&pool, &MIGRATOR).await.unwrap();

    force_migration_version(&pool, &MIGRATOR, first).await.unwrap();
    let recorded: Vec<i64> =
      sqlx::query_scalar("SELECT version FROM _sqlx_migrations ORDER BY version")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(recorded, vec![first]);

    assert!(
      force_migration_version(&pool, &MIGRATOR, 42)
        .await
        .is_err()
    );
  }
}
