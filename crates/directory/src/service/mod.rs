mod cache;
mod fetch;
mod generator;
mod query;

pub use generator::generate_users;

use std::sync::Arc;
use std::time::Duration;

use lendr_config::{config, Settings};
use lendr_database::{DatabaseInfo, RecordStore, User, UserStatus};
use lendr_result::{BoxedErr, ErrorType, SimpleError};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::warn;

use self::cache::ResultCache;
use crate::models::{PaginationParams, UserFilter, UsersResponse, UsersStatistics};

/// Data access for the user directory: remote fetch with a TTL cache and a
/// memoized synthetic fallback, in-memory filtering and pagination,
/// summary statistics, and durable per-record overrides.
///
/// Construct one per process and share it by reference; it owns the cache
/// slot and the storage connection.
#[derive(Debug)]
pub struct DirectoryService {
  pub(crate) config: Arc<Settings>,
  pub(crate) store: Arc<RecordStore>,
  pub(crate) http_client: Arc<Client>,
  pub(crate) cache: ResultCache,
  pub(crate) fallback: Mutex<Option<Arc<Vec<User>>>>,
}

impl DirectoryService {
  pub async fn new() -> Result<DirectoryService, BoxedErr> {
    let se = |err: BoxedErr, typ: ErrorType, msg: &str| {
      return SimpleError { err, _type: typ, message: msg.to_string() };
    };

    let config = config().await;

    let store = RecordStore::connect(DatabaseInfo::Auto, &config).await.map_err(|err| {
      Box::new(se(
        Box::new(std::io::Error::new(std::io::ErrorKind::NotConnected, err)),
        ErrorType::DBConnectionError,
        "failed to open the record store",
      )) as BoxedErr
    })?;

    Self::with_settings(config, store)
  }

  /// Wire the service explicitly. Used by tests and by embedders that
  /// manage their own settings or storage.
  pub fn with_settings(config: Settings, store: RecordStore) -> Result<DirectoryService, BoxedErr> {
    let http_client = Client::builder()
      .timeout(config.remote.request_timeout())
      .connect_timeout(config.remote.connect_timeout())
      .pool_idle_timeout(Duration::from_secs(90))
      .pool_max_idle_per_host(10)
      .build()
      .map_err(|err| Box::new(err) as BoxedErr)?;

    Ok(DirectoryService {
      cache: ResultCache::new(config.remote.cache_ttl()),
      config: Arc::new(config),
      store: Arc::new(store),
      http_client: Arc::new(http_client),
      fallback: Mutex::new(None),
    })
  }

  /// The durable record store, for callers that persist or enumerate
  /// records directly.
  pub fn store(&self) -> &Arc<RecordStore> {
    &self.store
  }

  /// A filtered, paginated page of the collection plus the total match
  /// count. Page and limit fall back to their configured defaults and are
  /// never allowed below 1; pages past the end come back empty with the
  /// total intact.
  pub async fn get_users(
    &self,
    pagination: Option<PaginationParams>,
    filters: Option<UserFilter>,
  ) -> UsersResponse {
    let collection = self.users_collection().await;

    let filter = filters.unwrap_or_default();
    let matches = query::apply_filters(&collection, &filter);
    let total = matches.len();

    let defaults = &self.config.pagination;
    let page = pagination.map(|p| p.page).unwrap_or(defaults.default_page).max(1);
    let limit = pagination.map(|p| p.limit).unwrap_or(defaults.default_limit).max(1);

    UsersResponse { users: query::paginate(matches, page, limit), total, page, limit }
  }

  /// Point lookup. A locally persisted record wins over a freshly fetched
  /// or generated copy; unknown ids miss with `None`.
  pub async fn get_user_by_id(&self, id: &str) -> Option<User> {
    if let Some(user) = self.store.get_user(id).await {
      return Some(user);
    }

    let collection = self.users_collection().await;
    collection.iter().find(|u| u.id == id).cloned()
  }

  /// Sorted, duplicate-free organization names for the filter dropdown.
  pub async fn get_organizations(&self) -> Vec<String> {
    let collection = self.users_collection().await;
    query::organizations_of(&collection)
  }

  pub async fn get_users_statistics(&self) -> UsersStatistics {
    let collection = self.users_collection().await;
    query::statistics_for(&collection, &self.config)
  }

  /// Persist a status change so it survives re-fetches of the collection.
  /// The record is sourced from the store when present, otherwise from the
  /// collection. Returns whether a record was found and written.
  pub async fn update_user_status(&self, id: &str, status: UserStatus) -> bool {
    let current = match self.store.get_user(id).await {
      Some(user) => Some(user),
      None => {
        let collection = self.users_collection().await;
        collection.iter().find(|u| u.id == id).cloned()
      }
    };

    let Some(mut user) = current else {
      return false;
    };

    user.status = status;
    if let Err(err) = self.store.save_user(&user).await {
      warn!("failed to persist status change for {}: {}", id, err);
      return false;
    }

    true
  }

  /// Drop the cached collection and the memoized fallback; the next load
  /// goes back to the remote endpoint.
  pub async fn clear_cache(&self) {
    self.cache.clear().await;
    *self.fallback.lock().await = None;
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;

  /// Endpoint on a reserved loopback port so every fetch fails fast and
  /// the service exercises its fallback path.
  fn offline_settings(dir: &tempfile::TempDir) -> Settings {
    let mut settings = Settings::default();
    settings.remote.endpoint = "http://127.0.0.1:9/users".to_string();
    settings.remote.timeout_ms = 1_000;
    settings.remote.connect_timeout_ms = 250;
    settings.storage.fallback_dir = dir.path().join("kv").to_string_lossy().to_string();
    settings
  }

  async fn offline_service(dir: &tempfile::TempDir) -> DirectoryService {
    let settings = offline_settings(dir);
    let store = RecordStore::connect(DatabaseInfo::Reference, &settings).await.unwrap();
    DirectoryService::with_settings(settings, store).unwrap()
  }

  #[tokio::test]
  async fn fallback_collection_has_the_configured_size() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let response = service.get_users(None, None).await;
    assert_eq!(response.total, 500);
    assert_eq!(response.page, 1);
    assert_eq!(response.limit, 10);
    assert_eq!(response.users.len(), 10);
  }

  #[tokio::test]
  async fn fallback_collection_is_stable_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let first = service.users_collection().await;
    let second = service.users_collection().await;
    assert!(Arc::ptr_eq(&first, &second));

    service.clear_cache().await;
    let third = service.users_collection().await;
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.len(), 500);
  }

  #[tokio::test]
  async fn pagination_parameters_are_respected() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let response =
      service.get_users(Some(PaginationParams { page: 2, limit: 20 }), None).await;

    assert_eq!(response.users.len(), 20);
    assert_eq!(response.total, 500);
    assert_eq!(response.page, 2);
    assert_eq!(response.limit, 20);
  }

  #[tokio::test]
  async fn pages_past_the_end_are_empty_with_total_intact() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let response =
      service.get_users(Some(PaginationParams { page: 9_999, limit: 10 }), None).await;

    assert!(response.users.is_empty());
    assert_eq!(response.total, 500);
    assert_eq!(response.page, 9_999);
  }

  #[tokio::test]
  async fn zero_page_and_limit_clamp_to_one() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let response = service.get_users(Some(PaginationParams { page: 0, limit: 0 }), None).await;
    assert_eq!(response.page, 1);
    assert_eq!(response.limit, 1);
    assert_eq!(response.users.len(), 1);
  }

  #[tokio::test]
  async fn status_filter_bounds_both_records_and_total() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let collection = service.users_collection().await;
    let active = collection.iter().filter(|u| u.status == UserStatus::Active).count();

    let response = service
      .get_users(
        Some(PaginationParams { page: 1, limit: 1_000 }),
        Some(UserFilter { status: Some(UserStatus::Active), ..Default::default() }),
      )
      .await;

    assert_eq!(response.total, active);
    assert_eq!(response.users.len(), active);
    assert!(response.users.iter().all(|u| u.status == UserStatus::Active));
  }

  #[tokio::test]
  async fn lookup_prefers_the_stored_record() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let fetched = service.get_user_by_id("user-1").await.unwrap();
    assert_eq!(fetched.id, "user-1");

    let mut edited = fetched.clone();
    edited.status = UserStatus::Blacklisted;
    edited.organization = "Archived".to_string();
    service.store().save_user(&edited).await.unwrap();

    let reloaded = service.get_user_by_id("user-1").await.unwrap();
    assert_eq!(reloaded, edited);
  }

  #[tokio::test]
  async fn lookup_misses_with_none() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    assert_eq!(service.get_user_by_id("user-12345678").await, None);
    assert_eq!(service.get_user_by_id("").await, None);
    assert_eq!(service.get_user_by_id("<script>alert(1)</script>").await, None);
  }

  #[tokio::test]
  async fn status_updates_reach_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    assert!(service.update_user_status("user-2", UserStatus::Blacklisted).await);

    let stored = service.store().get_user("user-2").await.unwrap();
    assert_eq!(stored.status, UserStatus::Blacklisted);

    let seen = service.get_user_by_id("user-2").await.unwrap();
    assert_eq!(seen.status, UserStatus::Blacklisted);

    assert!(!service.update_user_status("no-such-user", UserStatus::Active).await);
  }

  #[tokio::test]
  async fn organizations_come_back_sorted_and_unique() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let organizations = service.get_organizations().await;
    assert!(!organizations.is_empty());
    assert!(organizations.windows(2).all(|w| w[0] < w[1]));
    assert!(organizations.iter().all(|org| !org.trim().is_empty()));
  }

  #[tokio::test]
  async fn statistics_are_formatted_strings() {
    let dir = tempfile::tempdir().unwrap();
    let service = offline_service(&dir).await;

    let stats = service.get_users_statistics().await;
    assert_eq!(stats.total_users, "500");
    assert_eq!(stats.users_with_loans, "1,750");
    assert_eq!(stats.users_with_savings, "10,250");
    assert!(!stats.active_users.starts_with('-'));
  }
}
