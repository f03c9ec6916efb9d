use std::time::Duration;
use std::{env, fs};

use cached::proc_macro::cached;
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Deserialize, Debug, Clone)]
pub struct Remote {
  pub endpoint: String,
  pub timeout_ms: u64,
  pub connect_timeout_ms: u64,
  pub cache_ttl_ms: u64,
}

impl Default for Remote {
  fn default() -> Self {
    Self {
      endpoint: "https://api.npoint.io/24eb0dde1623416ece94".to_string(),
      timeout_ms: 10_000,
      connect_timeout_ms: 3_000,
      cache_ttl_ms: 5 * 60 * 1000,
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Storage {
  pub database_path: String,
  pub fallback_dir: String,
  pub database_name: String,
  pub store_name: String,
  pub schema_version: u32,
}

impl Default for Storage {
  fn default() -> Self {
    Self {
      database_path: "lendr.db".to_string(),
      fallback_dir: "lendr-kv".to_string(),
      database_name: "lendr-db".to_string(),
      store_name: "users".to_string(),
      schema_version: 1,
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Generator {
  pub total_users: usize,
  pub since_year: i32,
  pub account_number_length: usize,
  pub bvn_length: usize,
}

impl Default for Generator {
  fn default() -> Self {
    Self { total_users: 500, since_year: 2015, account_number_length: 10, bvn_length: 11 }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Stats {
  pub loans_multiplier: f64,
  pub savings_multiplier: f64,
}

impl Default for Stats {
  fn default() -> Self {
    Self { loans_multiplier: 3.5, savings_multiplier: 20.5 }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
  pub default_page: usize,
  pub default_limit: usize,
}

impl Default for Pagination {
  fn default() -> Self {
    Self { default_page: 1, default_limit: 10 }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
  pub remote: Remote,
  pub storage: Storage,
  pub generator: Generator,
  pub stats: Stats,
  pub pagination: Pagination,
  pub production: bool,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      remote: Remote::default(),
      storage: Storage::default(),
      generator: Generator::default(),
      stats: Stats::default(),
      pagination: Pagination::default(),
      production: false,
    }
  }
}

impl Remote {
  pub fn request_timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }

  pub fn connect_timeout(&self) -> Duration {
    Duration::from_millis(self.connect_timeout_ms)
  }

  pub fn cache_ttl(&self) -> Duration {
    Duration::from_millis(self.cache_ttl_ms)
  }
}

impl Settings {
  pub fn preflight_checks(&self) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Initialize tracing subscriber for structured logging
    let subscriber =
      tracing_subscriber::registry().with(env_filter).with(tracing_subscriber::fmt::layer());

    let _ = tracing::subscriber::set_default(subscriber);

    if self.remote.endpoint.is_empty() {
      warn!("No remote endpoint specified! Every load will use the generated fallback.");
    }

    if self.storage.fallback_dir.is_empty() {
      warn!("No fallback storage directory specified! Record writes will not be mirrored.");
    }
  }
}

/// Configuration builder
static CONFIG_BUILDER: Lazy<RwLock<Settings>> = Lazy::new(|| {
  RwLock::new({
    let env_mode = env::var("ENV").unwrap_or("dev".to_string());
    let path = format!("/lendr.{}.yaml", env_mode);
    let mut settings = Settings::default();

    if std::path::Path::new(&path).exists() {
      let settings_str = fs::read_to_string(path).expect("Should read config file");
      settings = serde_yaml::from_str(&settings_str).expect("Should deserialize config file");
    }
    settings
  })
});

pub async fn read() -> Settings {
  CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 300)]
pub async fn config() -> Settings {
  let mut config = read().await;

  // auto-detect production nodes
  if config.remote.endpoint.contains("https") {
    config.production = true;
  }

  config
}
