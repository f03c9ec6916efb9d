use async_trait::async_trait;
use lendr_result::DBError;

use crate::{ReferenceDb, User, UsersRepository};

#[async_trait]
impl UsersRepository for ReferenceDb {
  async fn users_put(&self, user: &User) -> Result<(), DBError> {
    let mut users = self.users.lock().await;
    users.insert(user.id.clone(), user.clone());
    Ok(())
  }

  async fn users_get(&self, id: &str) -> Result<Option<User>, DBError> {
    let users = self.users.lock().await;
    Ok(users.get(id).cloned())
  }

  async fn users_get_all(&self) -> Result<Vec<User>, DBError> {
    let users = self.users.lock().await;
    Ok(users.values().cloned().collect())
  }

  async fn users_clear(&self) -> Result<(), DBError> {
    let mut users = self.users.lock().await;
    users.clear();
    Ok(())
  }
}
