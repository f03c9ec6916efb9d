use lendr_config::Settings;
use lendr_result::DBError;
use tracing::warn;

use crate::{Database, DatabaseInfo, KeyValueDb, User, UserStatus, UsersRepository};

/// Layered durable store for user records: a structured database in front
/// of a flat key-value fallback. Writes go through to both stores so a
/// read can still succeed when the structured side is unavailable; reads
/// try the structured store first and degrade to the fallback.
///
/// One store is opened per process and shared by reference.
#[derive(Debug)]
pub struct RecordStore {
  db: Database,
  kv: KeyValueDb,
}

impl RecordStore {
  pub async fn connect(info: DatabaseInfo, settings: &Settings) -> Result<RecordStore, String> {
    let db = info.connect().await?;
    let kv = KeyValueDb::open(&settings.storage.fallback_dir);
    Ok(RecordStore { db, kv })
  }

  /// The flat fallback store, also used directly for plain session keys.
  pub fn kv(&self) -> &KeyValueDb {
    &self.kv
  }

  /// Write-through: the record lands in the structured store and is
  /// mirrored to the fallback regardless of the structured outcome.
  pub async fn save_user(&self, user: &User) -> Result<(), DBError> {
    if let Err(err) = self.db.users_put(user).await {
      warn!("structured store rejected user {}, relying on fallback: {}", user.id, err);
    }

    self.kv.users_put(user).await
  }

  /// Structured store first, fallback second; unknown ids miss with `None`
  /// rather than an error.
  pub async fn get_user(&self, id: &str) -> Option<User> {
    match self.db.users_get(id).await {
      Ok(Some(user)) => return Some(user),
      Ok(None) => {}
      Err(err) => warn!("structured store lookup failed for {}: {}", id, err),
    }

    match self.kv.users_get(id).await {
      Ok(found) => found,
      Err(err) => {
        warn!("fallback lookup failed for {}: {}", id, err);
        None
      }
    }
  }

  /// Load a stored record, apply the status change, and write it back
  /// through both stores. Returns whether a record was updated.
  pub async fn update_user_status(&self, id: &str, status: UserStatus) -> Result<bool, DBError> {
    let Some(mut user) = self.get_user(id).await else {
      return Ok(false);
    };

    user.status = status;
    self.save_user(&user).await?;
    Ok(true)
  }

  pub async fn get_all_users(&self) -> Vec<User> {
    match self.db.users_get_all().await {
      Ok(users) => users,
      Err(err) => {
        warn!("structured store enumeration failed, using fallback: {}", err);
        self.kv.users_get_all().await.unwrap_or_default()
      }
    }
  }

  /// Empty both stores. Only entries owned by this store are removed from
  /// the shared fallback; unrelated keys survive.
  pub async fn clear_all(&self) -> Result<(), DBError> {
    if let Err(err) = self.db.users_clear().await {
      warn!("structured store clear failed: {}", err);
    }

    self.kv.users_clear().await
  }
}
