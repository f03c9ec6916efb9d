use async_trait::async_trait;
use lendr_result::{DBError, ErrorType};
use tracing::warn;

use crate::{KeyValueDb, User, UsersRepository, USER_KEY_PREFIX};

#[async_trait]
impl UsersRepository for KeyValueDb {
  async fn users_put(&self, user: &User) -> Result<(), DBError> {
    let path = "database.users.keyvalue.users_put".to_string();

    let record = serde_json::to_string(user).map_err(|err| DBError {
      err_type: ErrorType::JsonMarshal,
      msg: format!("failed to serialize user {}: {}", user.id, err),
      path,
      ..Default::default()
    })?;

    self.set(&KeyValueDb::user_key(&user.id), &record).await
  }

  async fn users_get(&self, id: &str) -> Result<Option<User>, DBError> {
    match self.get(&KeyValueDb::user_key(id)).await? {
      Some(record) => match serde_json::from_str(&record) {
        Ok(user) => Ok(Some(user)),
        Err(err) => {
          warn!("corrupted fallback entry for {}, ignoring: {}", id, err);
          Ok(None)
        }
      },
      None => Ok(None),
    }
  }

  async fn users_get_all(&self) -> Result<Vec<User>, DBError> {
    let records = self.values_with_prefix(USER_KEY_PREFIX).await?;

    let mut users = Vec::with_capacity(records.len());
    for record in records {
      match serde_json::from_str(&record) {
        Ok(user) => users.push(user),
        Err(err) => warn!("skipping corrupted fallback entry: {}", err),
      }
    }

    Ok(users)
  }

  async fn users_clear(&self) -> Result<(), DBError> {
    self.remove_prefixed(USER_KEY_PREFIX).await
  }
}
