use anyhow::{Context, Result};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Turns on SQLite foreign key enforcement for every pooled connection.
///
/// The pragma is per connection, and the cascade from authors to quotes
/// (and from quotes to their tag links) depends on it.
#[derive(Debug, Clone, Copy)]
struct EnableForeignKeys;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for EnableForeignKeys {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the given SQLite database URL
pub fn init_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(EnableForeignKeys))
        .build(manager)
        .with_context(|| format!("Failed to create pool for {}", database_url))
}
