use sqlx::SqlitePool;

/// SQLite-backed structured store. One lazily opened pool per process; the
/// record table is keyed by user id and holds the serialized record.
#[derive(Debug)]
pub struct SqliteDb {
  pub(crate) pool: SqlitePool,
  pub(crate) table: String,
}

impl SqliteDb {
  pub fn db(&self) -> &SqlitePool {
    &self.pool
  }

  pub fn table(&self) -> &str {
    &self.table
  }
}
