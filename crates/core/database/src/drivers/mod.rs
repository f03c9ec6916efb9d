use std::future::Future;
use std::pin::Pin;

pub use self::keyvalue::*;
pub use self::reference::*;

mod keyvalue;
mod reference;

#[cfg(feature = "sqlite")]
pub use self::sqlite::*;
#[cfg(feature = "sqlite")]
mod sqlite;

use lendr_config::config;

/// Database information to use to create a client
pub enum DatabaseInfo {
  /// Auto-detect the database in use
  Auto,
  /// Auto-detect the database in use and create an empty testing database
  Test(String),
  /// Use the mock database
  Reference,
  /// Open a SQLite database file
  #[cfg(feature = "sqlite")]
  Sqlite { path: String },
}

/// Database
#[derive(Debug)]
pub enum Database {
  /// Mock database
  Reference(ReferenceDb),
  /// SQLite database
  #[cfg(feature = "sqlite")]
  Sqlite(SqliteDb),
}

// Generic helper type alias and function
type BoxedFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>>>>;

fn boxed<T>(f: impl Future<Output = Result<T, String>> + 'static) -> BoxedFuture<T> {
  Box::pin(f)
}

impl DatabaseInfo {
  /// Create a database client from the given database information
  pub async fn connect(self) -> Result<Database, String> {
    let config = config().await;
    match self {
      DatabaseInfo::Auto => {
        if std::env::var("TEST_DB").is_ok() {
          boxed(DatabaseInfo::Test("lendr_test".to_string()).connect()).await
        } else if !config.storage.database_path.is_empty() {
          #[cfg(feature = "sqlite")]
          {
            boxed(
              DatabaseInfo::Sqlite { path: config.storage.database_path.clone() }.connect(),
            )
            .await
          }
          #[cfg(not(feature = "sqlite"))]
          {
            boxed(DatabaseInfo::Reference.connect()).await
          }
        } else {
          boxed(DatabaseInfo::Reference.connect()).await
        }
      }
      DatabaseInfo::Test(database_name) => {
        let test_db = std::env::var("TEST_DB")
          .expect("`TEST_DB` environment variable should be set to REFERENCE or SQLITE");

        match test_db.as_str() {
          "REFERENCE" => boxed(DatabaseInfo::Reference.connect()).await,
          #[cfg(feature = "sqlite")]
          "SQLITE" => {
            boxed(DatabaseInfo::Sqlite { path: format!("{}.sqlite", database_name) }.connect())
              .await
          }
          _ => unreachable!("must specify REFERENCE or SQLITE"),
        }
      }
      #[cfg(feature = "sqlite")]
      DatabaseInfo::Sqlite { path } => {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

        let options = SqliteConnectOptions::new().filename(&path).create_if_missing(true);

        let pool = SqlitePoolOptions::new()
          .max_connections(5)
          .connect_with(options)
          .await
          .map_err(|e| format!("Failed to open SQLite database: {}", e))?;

        let table = config.storage.store_name.clone();

        sqlx::query(&format!(
          "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, record TEXT NOT NULL)",
          table
        ))
        .execute(&pool)
        .await
        .map_err(|e| format!("Failed to prepare {} store: {}", table, e))?;

        sqlx::query(&format!("PRAGMA user_version = {}", config.storage.schema_version))
          .execute(&pool)
          .await
          .map_err(|e| format!("Failed to stamp schema version: {}", e))?;

        Ok(Database::Sqlite(SqliteDb { pool, table }))
      }
      DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
    }
  }
}
