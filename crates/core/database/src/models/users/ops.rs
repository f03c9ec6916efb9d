mod keyvalue;
mod reference;

#[cfg(feature = "sqlite")]
mod sqlite;

use async_trait::async_trait;
use lendr_result::DBError;

use crate::User;

#[async_trait]
pub trait UsersRepository: Sync + Send {
  /// Insert or replace a stored user record
  async fn users_put(&self, user: &User) -> Result<(), DBError>;
  /// Point lookup by record id
  async fn users_get(&self, id: &str) -> Result<Option<User>, DBError>;
  /// Every record this store holds
  async fn users_get_all(&self) -> Result<Vec<User>, DBError>;
  /// Drop every record this store owns, leaving unrelated data alone
  async fn users_clear(&self) -> Result<(), DBError>;
}
