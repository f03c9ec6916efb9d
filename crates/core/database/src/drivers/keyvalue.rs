use std::path::{Path, PathBuf};

use lendr_result::{DBError, ErrorType};
use tracing::debug;

/// Key prefix for user records; entries under other keys (e.g. session
/// state written by the UI layer) share the store but are never touched by
/// record enumeration or clearing.
pub const USER_KEY_PREFIX: &str = "user_";

/// Flat file-per-key store used as the always-available fallback when the
/// structured database is missing a record or cannot be reached.
///
/// Writes go through a tmp file and a rename, so a reader never sees a
/// half-written entry.
#[derive(Debug, Clone)]
pub struct KeyValueDb {
  root: PathBuf,
}

impl KeyValueDb {
  pub fn open(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn user_key(id: &str) -> String {
    format!("{}{}", USER_KEY_PREFIX, id)
  }

  /// Keys land on the filesystem, so anything outside [A-Za-z0-9._-] is
  /// flattened to '-' before it can influence the path.
  fn file_stem(key: &str) -> String {
    key
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '-' })
      .collect()
  }

  fn entry_path(&self, key: &str) -> PathBuf {
    self.root.join(format!("{}.json", Self::file_stem(key)))
  }

  fn io_err(path: &str, op: &str, err: std::io::Error) -> DBError {
    DBError {
      err_type: ErrorType::DatabaseError,
      msg: format!("failed to {}: {}", op, err),
      path: path.to_string(),
      ..Default::default()
    }
  }

  pub async fn set(&self, key: &str, value: &str) -> Result<(), DBError> {
    let path = "database.keyvalue.set";

    tokio::fs::create_dir_all(&self.root)
      .await
      .map_err(|err| Self::io_err(path, "create fallback store dir", err))?;

    let target = self.entry_path(key);
    let tmp = target.with_extension("json.tmp");

    tokio::fs::write(&tmp, value.as_bytes())
      .await
      .map_err(|err| Self::io_err(path, "write fallback entry", err))?;

    tokio::fs::rename(&tmp, &target)
      .await
      .map_err(|err| Self::io_err(path, "commit fallback entry", err))?;

    debug!(key = key, "fallback entry written");
    Ok(())
  }

  pub async fn get(&self, key: &str) -> Result<Option<String>, DBError> {
    let path = "database.keyvalue.get";

    match tokio::fs::read_to_string(self.entry_path(key)).await {
      Ok(value) => Ok(Some(value)),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(Self::io_err(path, "read fallback entry", err)),
    }
  }

  pub async fn remove(&self, key: &str) -> Result<(), DBError> {
    let path = "database.keyvalue.remove";

    match tokio::fs::remove_file(self.entry_path(key)).await {
      Ok(()) => Ok(()),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(err) => Err(Self::io_err(path, "remove fallback entry", err)),
    }
  }

  /// All stored values whose key carries the given prefix.
  pub async fn values_with_prefix(&self, prefix: &str) -> Result<Vec<String>, DBError> {
    let path = "database.keyvalue.values_with_prefix";
    let mut values = Vec::new();

    let mut entries = match tokio::fs::read_dir(&self.root).await {
      Ok(entries) => entries,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(values),
      Err(err) => return Err(Self::io_err(path, "list fallback store", err)),
    };

    while let Some(entry) = entries
      .next_entry()
      .await
      .map_err(|err| Self::io_err(path, "list fallback store", err))?
    {
      if !Self::stem_matches(&entry.path(), prefix) {
        continue;
      }
      match tokio::fs::read_to_string(entry.path()).await {
        Ok(value) => values.push(value),
        Err(err) => return Err(Self::io_err(path, "read fallback entry", err)),
      }
    }

    Ok(values)
  }

  /// Remove every entry whose key carries the given prefix, leaving
  /// unrelated entries in place.
  pub async fn remove_prefixed(&self, prefix: &str) -> Result<(), DBError> {
    let path = "database.keyvalue.remove_prefixed";

    let mut entries = match tokio::fs::read_dir(&self.root).await {
      Ok(entries) => entries,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
      Err(err) => return Err(Self::io_err(path, "list fallback store", err)),
    };

    while let Some(entry) = entries
      .next_entry()
      .await
      .map_err(|err| Self::io_err(path, "list fallback store", err))?
    {
      if Self::stem_matches(&entry.path(), prefix) {
        tokio::fs::remove_file(entry.path())
          .await
          .map_err(|err| Self::io_err(path, "remove fallback entry", err))?;
      }
    }

    Ok(())
  }

  fn stem_matches(path: &Path, prefix: &str) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
      && path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.starts_with(prefix))
  }
}
