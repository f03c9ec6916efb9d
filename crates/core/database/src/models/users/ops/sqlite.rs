use async_trait::async_trait;
use lendr_result::{DBError, ErrorType};
use sqlx::Row;
use tracing::warn;

use crate::{SqliteDb, User, UsersRepository};

#[async_trait]
impl UsersRepository for SqliteDb {
  async fn users_put(&self, user: &User) -> Result<(), DBError> {
    let path = "database.users.users_put".to_string();

    let record = serde_json::to_string(user).map_err(|err| DBError {
      err_type: ErrorType::JsonMarshal,
      msg: format!("failed to serialize user {}: {}", user.id, err),
      path: path.clone(),
      ..Default::default()
    })?;

    let result = sqlx::query(&format!(
      "INSERT INTO {} (id, record) VALUES ($1, $2)
       ON CONFLICT(id) DO UPDATE SET record = excluded.record",
      self.table()
    ))
    .bind(&user.id)
    .bind(&record)
    .execute(self.db())
    .await;

    match result {
      Ok(_) => Ok(()),
      Err(err) => Err(DBError {
        err_type: ErrorType::DBInsertError,
        msg: format!("failed to store user {}: {}", user.id, err),
        path,
        ..Default::default()
      }),
    }
  }

  async fn users_get(&self, id: &str) -> Result<Option<User>, DBError> {
    let path = "database.users.users_get".to_string();

    let row = sqlx::query(&format!("SELECT record FROM {} WHERE id = $1", self.table()))
      .bind(id)
      .fetch_optional(self.db())
      .await;

    match row {
      Ok(Some(row)) => {
        let record: String = row.get(0);
        match serde_json::from_str(&record) {
          Ok(user) => Ok(Some(user)),
          Err(err) => Err(DBError {
            err_type: ErrorType::JsonUnmarshal,
            msg: format!("failed to decode stored user {}: {}", id, err),
            path,
            ..Default::default()
          }),
        }
      }
      Ok(None) => Ok(None),
      Err(err) => Err(DBError {
        err_type: ErrorType::DBSelectError,
        msg: format!("failed to fetch user {}: {}", id, err),
        path,
        ..Default::default()
      }),
    }
  }

  async fn users_get_all(&self) -> Result<Vec<User>, DBError> {
    let path = "database.users.users_get_all".to_string();

    let rows = sqlx::query(&format!("SELECT id, record FROM {}", self.table()))
      .fetch_all(self.db())
      .await
      .map_err(|err| DBError {
        err_type: ErrorType::DBSelectError,
        msg: format!("failed to enumerate users: {}", err),
        path,
        ..Default::default()
      })?;

    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
      let record: String = row.get(1);
      match serde_json::from_str(&record) {
        Ok(user) => users.push(user),
        Err(err) => {
          // a single corrupted row should not hide the rest
          let id: String = row.get(0);
          warn!("skipping undecodable stored user {}: {}", id, err);
        }
      }
    }

    Ok(users)
  }

  async fn users_clear(&self) -> Result<(), DBError> {
    let path = "database.users.users_clear".to_string();

    sqlx::query(&format!("DELETE FROM {}", self.table()))
      .execute(self.db())
      .await
      .map(|_| ())
      .map_err(|err| DBError {
        err_type: ErrorType::DBDeleteError,
        msg: format!("failed to clear users: {}", err),
        path,
        ..Default::default()
      })
  }
}

#[cfg(test)]
mod tests {
  use crate::test_support::sample_user;
  use crate::{Database, DatabaseInfo, UserStatus, UsersRepository};

  async fn open_db(dir: &tempfile::TempDir) -> Database {
    let path = dir.path().join("store.sqlite").to_string_lossy().to_string();
    DatabaseInfo::Sqlite { path }.connect().await.unwrap()
  }

  #[tokio::test]
  async fn put_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir).await;

    let user = sample_user("user-1");
    db.users_put(&user).await.unwrap();

    let loaded = db.users_get("user-1").await.unwrap();
    assert_eq!(loaded, Some(user));
    assert_eq!(db.users_get("user-2").await.unwrap(), None);
  }

  #[tokio::test]
  async fn put_replaces_on_conflicting_id() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir).await;

    let mut user = sample_user("user-1");
    db.users_put(&user).await.unwrap();

    user.status = UserStatus::Blacklisted;
    db.users_put(&user).await.unwrap();

    let loaded = db.users_get("user-1").await.unwrap().unwrap();
    assert_eq!(loaded.status, UserStatus::Blacklisted);
    assert_eq!(db.users_get_all().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn clear_empties_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir).await;

    db.users_put(&sample_user("user-1")).await.unwrap();
    db.users_put(&sample_user("user-2")).await.unwrap();
    db.users_clear().await.unwrap();

    assert!(db.users_get_all().await.unwrap().is_empty());
  }
}
