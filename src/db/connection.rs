use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::config::DatabaseSettings;
use crate::error::CatalogError;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Builds the pool without opening a connection, so a database that is down
/// at startup doesn't keep the server from binding.
pub fn build_pool(settings: &DatabaseSettings) -> PgPool {
    let database_url = settings.url.clone().unwrap_or_default();
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(Duration::from_secs(settings.timeout_seconds))
        .build_unchecked(manager)
}

/// Applies pending embedded migrations and returns how many ran.
pub fn run_migrations(pool: &PgPool) -> Result<usize, CatalogError> {
    let mut pooled = pool.get()?;
    let conn: &mut PgConnection = &mut pooled;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| CatalogError::Migration(e.to_string()))?;
    Ok(applied.len())
}
