use std::sync::Arc;

use lendr_database::User;
use lendr_result::FetchError;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{generator, DirectoryService};

/// Remote payload shape: the endpoint serves either a bare array of users
/// or an object wrapping them in a `users` field. Normalization happens
/// here, in one place, instead of ad hoc shape sniffing downstream.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UsersPayload {
  Bare(Vec<User>),
  Wrapped { users: Vec<User> },
}

impl UsersPayload {
  pub(crate) fn into_users(self) -> Vec<User> {
    match self {
      UsersPayload::Bare(users) => users,
      UsersPayload::Wrapped { users } => users,
    }
  }
}

impl DirectoryService {
  /// The user collection, from the first source that can produce one:
  /// cache, then the remote endpoint, then the memoized synthetic
  /// fallback. Always yields a collection; remote failures are logged and
  /// absorbed.
  pub(crate) async fn users_collection(&self) -> Arc<Vec<User>> {
    if let Some(users) = self.cache.get().await {
      return users;
    }

    match self.fetch_remote().await {
      Ok(users) => {
        let users = Arc::new(users);
        self.cache.set(users.clone()).await;
        users
      }
      Err(err) => {
        warn!("failed to fetch from remote endpoint, using local fallback: {}", err);
        self.fallback_users().await
      }
    }
  }

  /// One bounded GET against the configured endpoint. No retries; any
  /// failure is reported as a typed [`FetchError`] and handled by the
  /// caller.
  async fn fetch_remote(&self) -> Result<Vec<User>, FetchError> {
    let endpoint = &self.config.remote.endpoint;
    debug!("fetching users from {}", endpoint);

    let response = self
      .http_client
      .get(endpoint)
      .header("Content-Type", "application/json")
      .send()
      .await
      .map_err(|err| {
        if err.is_timeout() {
          FetchError::Timeout(self.config.remote.timeout_ms)
        } else {
          FetchError::Transport(err.to_string())
        }
      })?;

    let status = response.status();
    if !status.is_success() {
      return Err(FetchError::Status(status.as_u16()));
    }

    let payload: UsersPayload =
      response.json().await.map_err(|err| FetchError::Decode(err.to_string()))?;

    let users = payload.into_users();
    if users.is_empty() {
      return Err(FetchError::EmptyPayload);
    }

    Ok(users)
  }

  /// Memoized synthetic collection: generated once per process and reused
  /// until `clear_cache`, so repeated failing loads stay stable.
  pub(crate) async fn fallback_users(&self) -> Arc<Vec<User>> {
    let mut slot = self.fallback.lock().await;

    if let Some(users) = slot.as_ref() {
      return users.clone();
    }

    let users = Arc::new(generator::generate_users(&self.config));
    *slot = Some(users.clone());
    users
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_and_wrapped_payloads_normalize_alike() {
    let bare = serde_json::from_str::<UsersPayload>(r#"[]"#).unwrap().into_users();
    assert!(bare.is_empty());

    let wrapped = r#"{"users": [], "total": 500, "page": 1, "limit": 10}"#;
    let users = serde_json::from_str::<UsersPayload>(wrapped).unwrap().into_users();
    assert!(users.is_empty());
  }

  #[test]
  fn unrecognized_payloads_fail_to_decode() {
    assert!(serde_json::from_str::<UsersPayload>(r#"{"records": []}"#).is_err());
    assert!(serde_json::from_str::<UsersPayload>(r#""nope""#).is_err());
  }
}
