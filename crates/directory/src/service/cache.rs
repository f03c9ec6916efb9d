use std::sync::Arc;
use std::time::{Duration, Instant};

use lendr_database::User;
use tokio::sync::RwLock;
use tracing::debug;

/// Wholesale snapshot of the user collection. Entries are replaced, never
/// patched.
#[derive(Debug, Clone)]
struct CacheEntry {
  users: Arc<Vec<User>>,
  fetched_at: Instant,
}

/// Single shared slot holding the last successfully fetched collection,
/// valid until its age exceeds the TTL or the slot is cleared.
#[derive(Debug)]
pub(crate) struct ResultCache {
  slot: RwLock<Option<CacheEntry>>,
  ttl: Duration,
}

impl ResultCache {
  pub fn new(ttl: Duration) -> Self {
    Self { slot: RwLock::new(None), ttl }
  }

  pub async fn get(&self) -> Option<Arc<Vec<User>>> {
    let slot = self.slot.read().await;
    match slot.as_ref() {
      Some(entry) if entry.fetched_at.elapsed() < self.ttl => {
        debug!("serving user collection from cache");
        Some(entry.users.clone())
      }
      _ => None,
    }
  }

  pub async fn set(&self, users: Arc<Vec<User>>) {
    let mut slot = self.slot.write().await;
    *slot = Some(CacheEntry { users, fetched_at: Instant::now() });
  }

  pub async fn clear(&self) {
    let mut slot = self.slot.write().await;
    *slot = None;
  }
}
